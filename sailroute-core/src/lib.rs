//! Core routing engine for sailing boats.
//!
//! A boat's speed depends on the angle between its heading and the wind, so
//! the fastest way to a destination is not always a straight line. This crate
//! models boat speed with a polar diagram, caches the speed of every heading
//! for the current wind and searches direct and two-leg tacking routes for
//! the quickest one.
//!
//! ```
//! use sailroute_core::{RouteOptimizer, RouteRequest};
//!
//! let mut optimizer = RouteOptimizer::new();
//! let routes = optimizer.optimal_routes(&RouteRequest::new(90, 1500.0, 0, 8.0))?;
//! let best = routes.first().expect("at least one route");
//! assert!(best.is_direct());
//! assert_eq!(best.departure_heading(), 90);
//! # Ok::<(), sailroute_core::RouteRequestError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bearing;
mod cache;
pub mod geodesy;
mod optimizer;
pub mod polar;
mod request;
mod route;
pub mod test_support;

pub use cache::HeadingVelocityCache;
pub use geodesy::{Position, PositionError};
pub use optimizer::RouteOptimizer;
pub use polar::{BoatSpeedModel, DEFAULT_POLAR, PolarTable, PolarVelocityModel};
pub use request::{RouteRequest, RouteRequestError};
pub use route::{ARRIVAL_THRESHOLD_SECS, Leg, Route, UNSAILABLE_DURATION};
