//! Inputs to a route search.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bearing::normalize_heading;

/// Destination and wind for one route search.
///
/// Headings are integer compass degrees and may lie outside `0..360`; they are
/// folded before use. Distance and wind speed must be finite and
/// non-negative.
///
/// # Examples
/// ```
/// use sailroute_core::RouteRequest;
///
/// let request = RouteRequest::new(-90, 1500.0, 400, 6.0);
/// assert!(request.validate().is_ok());
/// assert_eq!(request.destination_heading(), 270);
/// assert_eq!(request.wind_heading(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteRequest {
    /// Compass bearing to the destination in degrees.
    pub destination_heading_deg: i32,
    /// Straight-line distance to the destination in metres.
    pub destination_distance_m: f64,
    /// Compass heading the wind blows from in degrees.
    pub wind_heading_deg: i32,
    /// True wind speed in knots.
    pub wind_speed_knots: f64,
}

/// Reasons a [`RouteRequest`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RouteRequestError {
    /// The destination distance was negative.
    #[error("destination distance must not be negative, got {0} m")]
    NegativeDistance(f64),
    /// The destination distance was NaN or infinite.
    #[error("destination distance must be finite")]
    NonFiniteDistance,
    /// The wind speed was negative.
    #[error("wind speed must not be negative, got {0} kn")]
    NegativeWindSpeed(f64),
    /// The wind speed was NaN or infinite.
    #[error("wind speed must be finite")]
    NonFiniteWindSpeed,
}

impl RouteRequest {
    /// Bundle the four search inputs.
    #[must_use]
    pub const fn new(
        destination_heading_deg: i32,
        destination_distance_m: f64,
        wind_heading_deg: i32,
        wind_speed_knots: f64,
    ) -> Self {
        Self {
            destination_heading_deg,
            destination_distance_m,
            wind_heading_deg,
            wind_speed_knots,
        }
    }

    /// Check that distance and wind speed are finite and non-negative.
    ///
    /// # Errors
    /// Returns the first [`RouteRequestError`] found, distance before speed.
    pub fn validate(&self) -> Result<(), RouteRequestError> {
        if !self.destination_distance_m.is_finite() {
            return Err(RouteRequestError::NonFiniteDistance);
        }
        if self.destination_distance_m < 0.0 {
            return Err(RouteRequestError::NegativeDistance(
                self.destination_distance_m,
            ));
        }
        if !self.wind_speed_knots.is_finite() {
            return Err(RouteRequestError::NonFiniteWindSpeed);
        }
        if self.wind_speed_knots < 0.0 {
            return Err(RouteRequestError::NegativeWindSpeed(self.wind_speed_knots));
        }
        Ok(())
    }

    /// Destination heading folded into `0..360`.
    #[must_use]
    pub fn destination_heading(&self) -> u16 {
        normalize_heading(self.destination_heading_deg)
    }

    /// Wind heading folded into `0..360`.
    #[must_use]
    pub fn wind_heading(&self) -> u16 {
        normalize_heading(self.wind_heading_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1500.0, 6.0)]
    #[case(1.0, 25.0)]
    fn accepts_non_negative_inputs(#[case] distance: f64, #[case] speed: f64) {
        assert_eq!(RouteRequest::new(0, distance, 0, speed).validate(), Ok(()));
    }

    #[rstest]
    #[case(-1.0, 6.0, RouteRequestError::NegativeDistance(-1.0))]
    #[case(f64::INFINITY, 6.0, RouteRequestError::NonFiniteDistance)]
    #[case(100.0, -0.5, RouteRequestError::NegativeWindSpeed(-0.5))]
    #[case(100.0, f64::NAN, RouteRequestError::NonFiniteWindSpeed)]
    #[case(-1.0, -1.0, RouteRequestError::NegativeDistance(-1.0))]
    fn rejects_contract_violations(
        #[case] distance: f64,
        #[case] speed: f64,
        #[case] expected: RouteRequestError,
    ) {
        assert_eq!(
            RouteRequest::new(0, distance, 0, speed).validate(),
            Err(expected)
        );
    }

    #[rstest]
    #[case(360, 0)]
    #[case(-45, 315)]
    #[case(1085, 5)]
    fn folds_headings(#[case] raw: i32, #[case] expected: u16) {
        let request = RouteRequest::new(raw, 1.0, raw, 1.0);
        assert_eq!(request.destination_heading(), expected);
        assert_eq!(request.wind_heading(), expected);
    }
}
