//! Great-circle helpers linking routes to positions on the globe.
//!
//! The optimiser works on a bearing and a distance. These helpers derive both
//! from a pair of positions and turn a [`Route`] back into waypoints, using a
//! spherical Earth via [`geo::Haversine`].

use std::str::FromStr;

use geo::{Bearing, Destination, Distance, Haversine, Point};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bearing::normalize_heading;
use crate::request::RouteRequest;
use crate::route::Route;

/// A latitude/longitude pair in decimal degrees.
///
/// # Examples
/// ```
/// use sailroute_core::Position;
///
/// let harbour: Position = "50.80,-1.10".parse()?;
/// assert_eq!(harbour.latitude(), 50.80);
/// assert_eq!(harbour.longitude(), -1.10);
/// # Ok::<(), sailroute_core::PositionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    latitude: f64,
    longitude: f64,
}

/// Errors returned when building or parsing a [`Position`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    /// The text was not two comma-separated numbers.
    #[error("expected `latitude,longitude`, got {0:?}")]
    Malformed(String),
    /// Latitude outside `-90..=90` or not finite.
    #[error("latitude {0} is outside -90..=90")]
    Latitude(f64),
    /// Longitude outside `-180..=180` or not finite.
    #[error("longitude {0} is outside -180..=180")]
    Longitude(f64),
}

impl Position {
    /// Validate and construct a position.
    ///
    /// # Errors
    /// Returns [`PositionError::Latitude`] or [`PositionError::Longitude`]
    /// for out-of-range or non-finite coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, PositionError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PositionError::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(PositionError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Initial great-circle bearing to `other`, rounded to a whole degree.
    #[must_use]
    pub fn bearing_to(&self, other: &Self) -> u16 {
        let degrees = Haversine.bearing(self.point(), other.point()).round();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "bearings are rounded and lie within 0..=360"
        )]
        let whole = degrees as i32;
        normalize_heading(whole)
    }

    /// Great-circle distance to `other` in metres.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        Haversine.distance(self.point(), other.point())
    }

    /// The position reached by sailing `distance_m` metres on `heading`.
    #[must_use]
    pub fn offset(&self, heading: u16, distance_m: f64) -> Self {
        Self::from_point(Haversine.destination(self.point(), f64::from(heading), distance_m))
    }

    fn point(self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    fn from_point(point: Point<f64>) -> Self {
        Self {
            latitude: point.y(),
            longitude: point.x(),
        }
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || PositionError::Malformed(text.to_owned());
        let (latitude, longitude) = text.split_once(',').ok_or_else(malformed)?;
        let lat = latitude.trim().parse::<f64>().map_err(|_| malformed())?;
        let lon = longitude.trim().parse::<f64>().map_err(|_| malformed())?;
        Self::new(lat, lon)
    }
}

impl RouteRequest {
    /// Request for sailing from `from` to `to` under the given wind.
    ///
    /// # Examples
    /// ```
    /// use sailroute_core::{Position, RouteRequest};
    ///
    /// let from = Position::new(0.0, 0.0)?;
    /// let to = Position::new(0.0, 0.01)?;
    /// let request = RouteRequest::between(&from, &to, 0, 6.0);
    /// assert_eq!(request.destination_heading(), 90);
    /// assert!((request.destination_distance_m - 1112.0).abs() < 1.0);
    /// # Ok::<(), sailroute_core::PositionError>(())
    /// ```
    #[must_use]
    pub fn between(
        from: &Position,
        to: &Position,
        wind_heading_deg: i32,
        wind_speed_knots: f64,
    ) -> Self {
        Self::new(
            i32::from(from.bearing_to(to)),
            from.distance_to(to),
            wind_heading_deg,
            wind_speed_knots,
        )
    }
}

impl Route {
    /// Positions visited when sailing this route from `start`.
    ///
    /// Direct routes yield the start and end; tacks add the turning point.
    #[must_use]
    pub fn waypoints(&self, start: &Position) -> Vec<Position> {
        let turn = start.offset(self.departure_heading(), self.departure_distance());
        match self.arrival_leg() {
            Some(arrival) => vec![
                *start,
                turn,
                turn.offset(arrival.heading, arrival.distance_m),
            ],
            None => vec![*start, turn],
        }
    }
}
