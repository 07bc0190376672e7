//! Sailing routes made of one or two legs.
//!
//! A route is either a single direct leg or a tack: a departure leg followed
//! by an arrival leg that meets the destination.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Duration reported for a direct route that cannot be sailed at all.
pub const UNSAILABLE_DURATION: f64 = -1.0;

/// Remaining duration, in seconds, below which the boat counts as arrived.
pub const ARRIVAL_THRESHOLD_SECS: f64 = 10.0;

/// One straight sailing segment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Leg {
    /// Compass heading in `0..360` degrees.
    pub heading: u16,
    /// Length of the segment in metres.
    pub distance_m: f64,
    /// Signed angle to the wind in `-180..=180` degrees.
    pub wind_bearing: i16,
}

/// A direct or tacking route to a destination.
///
/// Routes are immutable values produced by
/// [`RouteOptimizer`](crate::RouteOptimizer). For a direct route the arrival
/// heading and wind bearing mirror the departure values and the arrival
/// distance is zero.
///
/// # Examples
/// ```
/// use sailroute_core::{Leg, Route};
///
/// let route = Route::tack(
///     Leg { heading: 45, distance_m: 600.0, wind_bearing: 45 },
///     Leg { heading: 315, distance_m: 400.0, wind_bearing: -45 },
///     180.0,
/// );
/// assert_eq!(route.total_distance(), 1000.0);
/// assert!(!route.is_direct());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    departure_heading: u16,
    arrival_heading: u16,
    departure_wind_bearing: i16,
    arrival_wind_bearing: i16,
    departure_distance_m: f64,
    arrival_distance_m: f64,
    duration_secs: f64,
}

impl Route {
    /// A route sailing straight along `leg`.
    ///
    /// Pass [`UNSAILABLE_DURATION`] when the heading has no boat speed.
    #[must_use]
    pub const fn direct(leg: Leg, duration_secs: f64) -> Self {
        Self {
            departure_heading: leg.heading,
            arrival_heading: leg.heading,
            departure_wind_bearing: leg.wind_bearing,
            arrival_wind_bearing: leg.wind_bearing,
            departure_distance_m: leg.distance_m,
            arrival_distance_m: 0.0,
            duration_secs,
        }
    }

    /// A route sailing `departure` then `arrival`.
    #[must_use]
    pub const fn tack(departure: Leg, arrival: Leg, duration_secs: f64) -> Self {
        Self {
            departure_heading: departure.heading,
            arrival_heading: arrival.heading,
            departure_wind_bearing: departure.wind_bearing,
            arrival_wind_bearing: arrival.wind_bearing,
            departure_distance_m: departure.distance_m,
            arrival_distance_m: arrival.distance_m,
            duration_secs,
        }
    }

    /// Heading of the first leg.
    #[must_use]
    pub const fn departure_heading(&self) -> u16 {
        self.departure_heading
    }

    /// Heading of the second leg.
    #[must_use]
    pub const fn arrival_heading(&self) -> u16 {
        self.arrival_heading
    }

    /// Relative wind bearing of the first leg.
    #[must_use]
    pub const fn departure_wind_bearing(&self) -> i16 {
        self.departure_wind_bearing
    }

    /// Relative wind bearing of the second leg.
    #[must_use]
    pub const fn arrival_wind_bearing(&self) -> i16 {
        self.arrival_wind_bearing
    }

    /// Length of the first leg in metres.
    #[must_use]
    pub const fn departure_distance(&self) -> f64 {
        self.departure_distance_m
    }

    /// Length of the second leg in metres; zero for direct routes.
    #[must_use]
    pub const fn arrival_distance(&self) -> f64 {
        self.arrival_distance_m
    }

    /// Sailing time in seconds, or [`UNSAILABLE_DURATION`].
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration_secs
    }

    /// Distance sailed over both legs in metres.
    #[expect(clippy::float_arithmetic, reason = "sums leg lengths")]
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.departure_distance_m + self.arrival_distance_m
    }

    /// The first leg.
    #[must_use]
    pub const fn departure_leg(&self) -> Leg {
        Leg {
            heading: self.departure_heading,
            distance_m: self.departure_distance_m,
            wind_bearing: self.departure_wind_bearing,
        }
    }

    /// The second leg, absent for direct routes.
    #[must_use]
    pub fn arrival_leg(&self) -> Option<Leg> {
        (!self.is_direct()).then_some(Leg {
            heading: self.arrival_heading,
            distance_m: self.arrival_distance_m,
            wind_bearing: self.arrival_wind_bearing,
        })
    }

    /// Whether the route is a single leg.
    #[must_use]
    pub fn is_direct(&self) -> bool {
        self.arrival_distance_m <= 0.0
    }

    /// Whether the route can be sailed at all.
    #[must_use]
    pub fn is_sailable(&self) -> bool {
        self.duration_secs >= 0.0
    }

    /// Whether the destination is close enough to count as reached.
    #[must_use]
    pub fn has_arrived(&self) -> bool {
        self.is_sailable() && self.duration_secs < ARRIVAL_THRESHOLD_SECS
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::float_cmp, reason = "values are copied, not computed")]

    use super::*;
    use rstest::rstest;

    const fn leg(heading: u16, distance_m: f64, wind_bearing: i16) -> Leg {
        Leg {
            heading,
            distance_m,
            wind_bearing,
        }
    }

    #[rstest]
    fn direct_route_mirrors_its_leg() {
        let route = Route::direct(leg(90, 1200.0, 90), 300.0);
        assert_eq!(route.arrival_heading(), 90);
        assert_eq!(route.arrival_wind_bearing(), 90);
        assert_eq!(route.arrival_distance(), 0.0);
        assert_eq!(route.total_distance(), 1200.0);
        assert!(route.is_direct());
        assert_eq!(route.arrival_leg(), None);
        assert_eq!(route.departure_leg(), leg(90, 1200.0, 90));
    }

    #[rstest]
    fn tack_route_exposes_both_legs() {
        let route = Route::tack(leg(40, 700.0, 40), leg(320, 500.0, -40), 420.0);
        assert_eq!(route.departure_heading(), 40);
        assert_eq!(route.arrival_heading(), 320);
        assert_eq!(route.total_distance(), 1200.0);
        assert_eq!(route.arrival_leg(), Some(leg(320, 500.0, -40)));
    }

    #[rstest]
    #[case(UNSAILABLE_DURATION, false, false)]
    #[case(0.0, true, true)]
    #[case(9.5, true, true)]
    #[case(10.0, true, false)]
    #[case(3600.0, true, false)]
    fn classifies_duration(
        #[case] duration: f64,
        #[case] sailable: bool,
        #[case] arrived: bool,
    ) {
        let route = Route::direct(leg(0, 10.0, 0), duration);
        assert_eq!(route.is_sailable(), sailable);
        assert_eq!(route.has_arrived(), arrived);
    }
}
