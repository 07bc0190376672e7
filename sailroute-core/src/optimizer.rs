//! Search for the fastest route to a destination under a steady wind.
//!
//! The search compares the direct course with every two-leg tack. A tack is
//! described by a departure heading and an arrival heading; together with the
//! straight line to the destination they form a triangle whose side lengths
//! follow from the law of sines. Departure headings are tried in ascending
//! order and, for each, arrival headings are walked from the reciprocal of the
//! destination towards the departure heading. That order is stable and decides
//! the order of tied routes in the result.

use std::iter::successors;

use log::{debug, trace};

use crate::bearing::{
    FULL_CIRCLE, HALF_CIRCLE, angular_distance, closest_rotation, degrees_to_radians, is_close,
    knots_to_metres_per_second, reciprocal, relative_wind_bearing,
};
use crate::cache::HeadingVelocityCache;
use crate::polar::{BoatSpeedModel, PolarVelocityModel};
use crate::request::{RouteRequest, RouteRequestError};
use crate::route::{Leg, Route, UNSAILABLE_DURATION};

/// Finds the fastest routes for a boat described by a [`BoatSpeedModel`].
///
/// The optimiser owns a [`HeadingVelocityCache`] so repeated searches under
/// the same wind skip re-evaluating the model. Searching takes `&mut self`;
/// share an optimiser across threads by serialising access, or give each
/// thread its own.
///
/// # Examples
/// ```
/// use sailroute_core::{RouteOptimizer, RouteRequest};
///
/// let mut optimizer = RouteOptimizer::new();
/// // Wind from the north, destination 2 km to the north: a tack is needed.
/// let routes = optimizer.optimal_routes(&RouteRequest::new(0, 2000.0, 0, 6.0))?;
/// assert!(routes.iter().all(|route| !route.is_direct()));
/// assert!(routes.iter().all(|route| route.is_sailable()));
/// # Ok::<(), sailroute_core::RouteRequestError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer<M = PolarVelocityModel> {
    model: M,
    cache: HeadingVelocityCache,
}

impl Default for RouteOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteOptimizer {
    /// Optimiser using the shipped polar diagram.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_model(PolarVelocityModel::new())
    }
}

impl<M> RouteOptimizer<M>
where
    M: BoatSpeedModel,
{
    /// Optimiser for a custom boat-speed model, starting with a cold cache.
    #[must_use]
    pub const fn with_model(model: M) -> Self {
        Self {
            model,
            cache: HeadingVelocityCache::new(),
        }
    }

    /// The boat-speed model.
    #[must_use]
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// The heading velocity cache, for inspection.
    #[must_use]
    pub const fn cache(&self) -> &HeadingVelocityCache {
        &self.cache
    }

    /// Fastest routes to the requested destination.
    ///
    /// The first route is always among the fastest; further routes tie with it
    /// within a relative tolerance of `1e-9`. When the destination heading
    /// cannot be sailed and no tack exists, the single direct route carries
    /// [`UNSAILABLE_DURATION`]. A zero distance yields one direct route of
    /// zero duration unless the wind leaves every heading unsailable.
    ///
    /// # Errors
    /// Returns [`RouteRequestError`] when the distance or wind speed is
    /// negative or not finite.
    pub fn optimal_routes(&mut self, request: &RouteRequest) -> Result<Vec<Route>, RouteRequestError> {
        request.validate()?;
        let wind_heading = request.wind_heading();
        self.cache
            .ensure_fresh(&self.model, wind_heading, request.wind_speed_knots);

        let destination = request.destination_heading();
        let search = Search {
            velocities: &self.cache,
            destination,
            opposite: reciprocal(destination),
            distance_m: request.destination_distance_m,
            wind_heading,
        };
        let routes = search.run();
        debug!(
            "found {} route(s) to {destination}° over {} m, best duration {:?} s",
            routes.len(),
            request.destination_distance_m,
            routes.first().map(Route::duration)
        );
        Ok(routes)
    }
}

/// A heading considered for one leg of a tack.
#[derive(Debug, Clone, Copy)]
struct LegCandidate {
    heading: u16,
    /// Angle at the start or end of the straight line to the destination.
    angle: u16,
    speed_knots: f64,
}

/// One search over a warm cache.
struct Search<'a> {
    velocities: &'a HeadingVelocityCache,
    destination: u16,
    opposite: u16,
    distance_m: f64,
    wind_heading: u16,
}

impl Search<'_> {
    fn run(&self) -> Vec<Route> {
        if self.distance_m <= 0.0 {
            return vec![self.stationary_route()];
        }

        let mut best = BestRoutes::seeded(self.direct_route());
        for departure in (0..FULL_CIRCLE).filter_map(|heading| self.departure(heading)) {
            for arrival in self.arrivals(departure.heading) {
                best.offer(self.tack(departure, arrival));
            }
        }
        best.into_routes()
    }

    fn sailable_speed(&self, heading: u16) -> Option<f64> {
        let speed = self.velocities.velocity_at(heading);
        (speed > 0.0 && !is_close(speed, 0.0)).then_some(speed)
    }

    fn leg(&self, heading: u16, distance_m: f64) -> Leg {
        Leg {
            heading,
            distance_m,
            wind_bearing: relative_wind_bearing(heading, self.wind_heading),
        }
    }

    fn stationary_route(&self) -> Route {
        let any_sailable = (0..FULL_CIRCLE).any(|heading| self.sailable_speed(heading).is_some());
        let duration = if any_sailable { 0.0 } else { UNSAILABLE_DURATION };
        Route::direct(self.leg(self.destination, 0.0), duration)
    }

    #[expect(clippy::float_arithmetic, reason = "duration from distance and speed")]
    fn direct_route(&self) -> Route {
        let duration = self
            .sailable_speed(self.destination)
            .map_or(UNSAILABLE_DURATION, |speed| {
                self.distance_m / knots_to_metres_per_second(speed)
            });
        Route::direct(self.leg(self.destination, self.distance_m), duration)
    }

    /// A departure heading worth walking arrivals for.
    ///
    /// The destination heading and its reciprocal cannot form a triangle.
    fn departure(&self, heading: u16) -> Option<LegCandidate> {
        if heading == self.destination || heading == self.opposite {
            return None;
        }
        self.sailable_speed(heading).map(|speed_knots| LegCandidate {
            heading,
            angle: angular_distance(self.destination, heading),
            speed_knots,
        })
    }

    /// Sailable arrival legs pairing with `departure`, in scan order.
    ///
    /// The scan starts one degree off the reciprocal of the destination and
    /// turns towards `departure`, stopping just before it.
    fn arrivals(&self, departure: u16) -> impl Iterator<Item = LegCandidate> + '_ {
        let rotation = closest_rotation(self.opposite, departure);
        successors(Some(rotation.step(self.opposite)), move |&heading| {
            Some(rotation.step(heading))
        })
        .take_while(move |&heading| heading != departure)
        .filter_map(move |heading| {
            let arrival = reciprocal(heading);
            self.sailable_speed(arrival).map(|speed_knots| LegCandidate {
                heading: arrival,
                angle: angular_distance(self.opposite, heading),
                speed_knots,
            })
        })
    }

    #[expect(clippy::float_arithmetic, reason = "law of sines on the tack triangle")]
    fn tack(&self, departure: LegCandidate, arrival: LegCandidate) -> Route {
        let tack_angle = HALF_CIRCLE - arrival.angle - departure.angle;
        let scale = self.distance_m / degrees_to_radians(tack_angle).sin();
        let arrival_distance = scale * degrees_to_radians(departure.angle).sin();
        let departure_distance = scale * degrees_to_radians(arrival.angle).sin();
        let duration = departure_distance / knots_to_metres_per_second(departure.speed_knots)
            + arrival_distance / knots_to_metres_per_second(arrival.speed_knots);
        Route::tack(
            self.leg(departure.heading, departure_distance),
            self.leg(arrival.heading, arrival_distance),
            duration,
        )
    }
}

/// Routes tied for the shortest duration seen so far.
#[derive(Debug)]
struct BestRoutes {
    routes: Vec<Route>,
}

impl BestRoutes {
    fn seeded(baseline: Route) -> Self {
        Self {
            routes: vec![baseline],
        }
    }

    fn offer(&mut self, route: Route) {
        let Some(best) = self.routes.first().copied() else {
            self.routes.push(route);
            return;
        };
        let duration = route.duration();
        if !best.is_sailable() || (duration < best.duration() && !is_close(duration, best.duration()))
        {
            trace!(
                "route {}°/{}° improves best duration to {duration} s",
                route.departure_heading(),
                route.arrival_heading()
            );
            self.routes.clear();
            self.routes.push(route);
        } else if is_close(duration, best.duration()) {
            trace!(
                "route {}°/{}° ties best duration {duration} s",
                route.departure_heading(),
                route.arrival_heading()
            );
            self.routes.push(route);
        }
    }

    fn into_routes(self) -> Vec<Route> {
        self.routes
    }
}
