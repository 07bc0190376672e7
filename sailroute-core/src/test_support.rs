//! Deterministic boat-speed models for unit, behaviour and property tests.
//!
//! These models ignore the wind speed (beyond treating calm as unsailable)
//! so that expected routes can be worked out by hand.

use crate::polar::BoatSpeedModel;

/// Sails at the same speed on every heading, dead upwind included.
///
/// # Examples
/// ```
/// use sailroute_core::BoatSpeedModel;
/// use sailroute_core::test_support::UniformSpeedModel;
///
/// let model = UniformSpeedModel::new(4.0);
/// assert_eq!(model.boat_speed(0, 6.0), 4.0);
/// assert_eq!(model.boat_speed(90, 0.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformSpeedModel {
    knots: f64,
}

impl UniformSpeedModel {
    /// Model sailing at `knots` whenever there is wind.
    #[must_use]
    pub const fn new(knots: f64) -> Self {
        Self { knots }
    }
}

impl BoatSpeedModel for UniformSpeedModel {
    fn boat_speed(&self, _wind_angle: u16, wind_speed_knots: f64) -> f64 {
        if wind_speed_knots > 0.0 {
            self.knots
        } else {
            0.0
        }
    }
}

/// Sails at a fixed speed outside a no-go cone around the wind.
///
/// Headings closer to the wind than `no_go_angle` degrees have no speed.
///
/// # Examples
/// ```
/// use sailroute_core::BoatSpeedModel;
/// use sailroute_core::test_support::NoGoZoneModel;
///
/// let model = NoGoZoneModel::new(45, 5.0);
/// assert_eq!(model.boat_speed(30, 8.0), 0.0);
/// assert_eq!(model.boat_speed(45, 8.0), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoGoZoneModel {
    no_go_angle: u16,
    knots: f64,
}

impl NoGoZoneModel {
    /// Model that cannot point higher than `no_go_angle`.
    #[must_use]
    pub const fn new(no_go_angle: u16, knots: f64) -> Self {
        Self { no_go_angle, knots }
    }
}

impl BoatSpeedModel for NoGoZoneModel {
    fn boat_speed(&self, wind_angle: u16, wind_speed_knots: f64) -> f64 {
        if wind_angle < self.no_go_angle || wind_speed_knots <= 0.0 {
            0.0
        } else {
            self.knots
        }
    }
}
