//! Per-heading boat speeds for one wind.
//!
//! The optimiser queries the boat speed of every compass heading many times
//! per search. [`HeadingVelocityCache`] evaluates the model once per heading
//! and keeps the result until the wind changes.

use log::debug;

use crate::bearing::{FULL_CIRCLE, angular_distance, is_close};
use crate::polar::BoatSpeedModel;

/// Wind the cached speeds were computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
struct WindKey {
    heading: u16,
    speed_knots: f64,
}

impl WindKey {
    fn matches(&self, wind_heading: u16, wind_speed_knots: f64) -> bool {
        self.heading == wind_heading && is_close(self.speed_knots, wind_speed_knots)
    }
}

/// Boat speed for each of the 360 whole-degree headings under a single wind.
///
/// The cache starts cold and is filled by [`ensure_fresh`](Self::ensure_fresh).
/// A rebuild happens only when the wind heading changes or the wind speed
/// moves beyond a relative tolerance of `1e-9`. Mutation needs `&mut self`, so
/// one cache serves one writer at a time.
///
/// # Examples
/// ```
/// use sailroute_core::{HeadingVelocityCache, PolarVelocityModel};
///
/// let polar = PolarVelocityModel::default();
/// let mut cache = HeadingVelocityCache::new();
/// assert!(cache.ensure_fresh(&polar, 0, 6.0));
/// assert!(!cache.ensure_fresh(&polar, 0, 6.0));
/// assert_eq!(cache.velocity_at(90), 9.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadingVelocityCache {
    key: Option<WindKey>,
    velocities: Vec<f64>,
}

impl HeadingVelocityCache {
    /// An empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            key: None,
            velocities: Vec::new(),
        }
    }

    /// Rebuild the table when it is cold or was built for a different wind.
    ///
    /// Returns `true` when a rebuild took place.
    pub fn ensure_fresh<M>(&mut self, model: &M, wind_heading: u16, wind_speed_knots: f64) -> bool
    where
        M: BoatSpeedModel + ?Sized,
    {
        if self
            .key
            .is_some_and(|key| key.matches(wind_heading, wind_speed_knots))
        {
            return false;
        }

        debug!("rebuilding heading velocities for wind {wind_heading}° at {wind_speed_knots} kn");
        self.velocities.clear();
        self.velocities.extend((0..FULL_CIRCLE).map(|heading| {
            model.boat_speed(angular_distance(heading, wind_heading), wind_speed_knots)
        }));
        self.key = Some(WindKey {
            heading: wind_heading,
            speed_knots: wind_speed_knots,
        });
        true
    }

    /// Cached boat speed in knots for `heading`.
    ///
    /// A cold cache reports zero for every heading.
    #[must_use]
    pub fn velocity_at(&self, heading: u16) -> f64 {
        self.velocities
            .get(usize::from(heading))
            .copied()
            .unwrap_or_default()
    }

    /// Wind heading and speed the cache currently holds, if any.
    #[must_use]
    pub fn wind(&self) -> Option<(u16, f64)> {
        self.key.map(|key| (key.heading, key.speed_knots))
    }

    /// Whether the cache has been filled at least once.
    #[must_use]
    pub const fn is_warm(&self) -> bool {
        self.key.is_some()
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::float_cmp, reason = "cached values are copied verbatim")]

    use super::*;
    use crate::polar::PolarVelocityModel;
    use rstest::{fixture, rstest};
    use std::cell::Cell;

    /// Counts how often the cache consults the model.
    #[derive(Default)]
    struct CountingModel {
        calls: Cell<usize>,
    }

    impl BoatSpeedModel for CountingModel {
        fn boat_speed(&self, wind_angle: u16, wind_speed_knots: f64) -> f64 {
            self.calls.set(self.calls.get() + 1);
            PolarVelocityModel::new().boat_speed(wind_angle, wind_speed_knots)
        }
    }

    #[fixture]
    fn model() -> CountingModel {
        CountingModel::default()
    }

    #[rstest]
    fn starts_cold() {
        let cache = HeadingVelocityCache::new();
        assert!(!cache.is_warm());
        assert_eq!(cache.wind(), None);
        assert_eq!(cache.velocity_at(90), 0.0);
    }

    #[rstest]
    fn fills_every_heading_once(model: CountingModel) {
        let mut cache = HeadingVelocityCache::new();
        assert!(cache.ensure_fresh(&model, 0, 6.0));
        assert_eq!(model.calls.get(), 360);
        assert!(!cache.ensure_fresh(&model, 0, 6.0));
        assert_eq!(model.calls.get(), 360);
    }

    #[rstest]
    #[case(10, 6.0)]
    #[case(0, 6.1)]
    #[case(0, 0.0)]
    fn rebuilds_when_wind_changes(model: CountingModel, #[case] heading: u16, #[case] speed: f64) {
        let mut cache = HeadingVelocityCache::new();
        cache.ensure_fresh(&model, 0, 6.0);
        assert!(cache.ensure_fresh(&model, heading, speed));
        assert_eq!(cache.wind(), Some((heading, speed)));
    }

    #[rstest]
    fn tolerates_rounding_noise_in_speed(model: CountingModel) {
        let mut cache = HeadingVelocityCache::new();
        cache.ensure_fresh(&model, 0, 6.0);
        assert!(!cache.ensure_fresh(&model, 0, 6.000_000_000_001));
    }

    #[rstest]
    fn projects_model_onto_headings(model: CountingModel) {
        let mut cache = HeadingVelocityCache::new();
        cache.ensure_fresh(&model, 90, 6.0);
        let polar = PolarVelocityModel::new();
        assert_eq!(cache.velocity_at(90), 0.0);
        assert_eq!(cache.velocity_at(0), polar.boat_speed(90, 6.0));
        assert_eq!(cache.velocity_at(180), polar.boat_speed(90, 6.0));
        assert_eq!(cache.velocity_at(300), polar.boat_speed(150, 6.0));
    }
}
