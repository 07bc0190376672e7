//! Facade crate for the sailroute routing engine.
//!
//! This crate re-exports the core domain types so applications can depend on
//! a single crate.

#![forbid(unsafe_code)]

pub use sailroute_core::{
    ARRIVAL_THRESHOLD_SECS, BoatSpeedModel, DEFAULT_POLAR, HeadingVelocityCache, Leg, PolarTable,
    PolarVelocityModel, Position, PositionError, Route, RouteOptimizer, RouteRequest,
    RouteRequestError, UNSAILABLE_DURATION,
};
pub use sailroute_core::{bearing, geodesy, polar};
