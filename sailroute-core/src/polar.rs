//! Boat-speed polar diagram.
//!
//! A polar maps the angle between the boat's heading and the wind (0° dead
//! upwind, 180° dead downwind) and the true wind speed onto the speed the boat
//! can make through the water. [`PolarVelocityModel`] stores the diagram as a
//! grid and interpolates bilinearly between grid points.

use log::warn;

use crate::bearing::{HALF_CIRCLE, is_close};

/// Number of wind-angle columns: 0° to 180° in 10° steps.
pub const ANGLE_COLUMNS: usize = 19;

/// Number of wind-speed rows: 0 to 10 knots in 1 knot steps.
pub const SPEED_ROWS: usize = 11;

/// Boat speeds in knots, indexed by `[wind speed knots][wind angle / 10]`.
pub type PolarTable = [[f64; ANGLE_COLUMNS]; SPEED_ROWS];

/// Width of one wind-angle column in degrees.
const ANGLE_STEP: u16 = 10;

/// Highest wind speed with a dedicated row.
const TOP_SPEED_ROW: u32 = 10;

/// Speed row without measurements; interpolation spans its neighbours.
const MISSING_SPEED_ROW: u32 = 1;

/// The shipped polar diagram.
///
/// Both the dead-upwind (0°) and dead-downwind (180°) columns are zero.
#[rustfmt::skip]
pub const DEFAULT_POLAR: PolarTable = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.1, 0.5, 0.9, 1.2, 2.0, 3.2, 4.3, 4.6, 4.8, 4.9, 4.7, 3.4, 2.1, 1.7, 1.6, 1.5, 1.4, 0.0],
    [0.0, 0.4, 0.9, 1.4, 2.2, 3.2, 4.5, 5.7, 6.1, 6.3, 6.5, 6.3, 4.9, 3.2, 2.7, 2.3, 2.2, 2.1, 0.0],
    [0.0, 0.5, 1.5, 2.0, 3.0, 4.4, 5.8, 7.0, 7.5, 7.8, 8.1, 8.0, 6.5, 4.6, 3.6, 3.1, 2.8, 2.6, 0.0],
    [0.0, 0.8, 1.9, 2.8, 4.1, 5.8, 6.9, 7.9, 8.2, 8.3, 8.5, 8.4, 7.4, 6.2, 5.1, 4.2, 3.6, 3.1, 0.0],
    [0.0, 1.0, 2.3, 3.5, 5.4, 7.1, 8.0, 8.7, 8.9, 9.0, 9.0, 8.9, 8.4, 7.8, 6.7, 5.3, 4.3, 3.6, 0.0],
    [0.0, 1.3, 2.5, 4.0, 6.0, 7.8, 8.5, 9.3, 9.4, 9.5, 9.6, 9.6, 9.2, 8.6, 7.7, 6.1, 5.0, 4.2, 0.0],
    [0.0, 1.5, 2.8, 4.5, 6.9, 8.4, 9.2, 9.8, 10.0, 10.2, 10.3, 10.3, 9.9, 9.4, 8.6, 7.0, 5.8, 4.9, 0.0],
    [0.0, 1.6, 3.0, 4.8, 7.2, 8.7, 9.4, 10.1, 10.3, 10.4, 10.6, 10.6, 10.3, 10.0, 9.4, 7.6, 6.3, 5.4, 0.0],
    [0.0, 1.6, 3.3, 5.2, 7.8, 9.1, 9.7, 10.3, 10.6, 10.7, 10.9, 11.1, 10.7, 10.4, 9.9, 8.3, 6.9, 6.0, 0.0],
];

/// Estimate how fast a boat sails for a given wind.
///
/// Implementations must be pure: the same inputs always yield the same speed.
/// The route optimiser memoises results per heading and relies on this.
pub trait BoatSpeedModel {
    /// Boat speed in knots.
    ///
    /// `wind_angle` is the unsigned angle to the wind in `0..=180` degrees and
    /// `wind_speed_knots` the true wind speed.
    fn boat_speed(&self, wind_angle: u16, wind_speed_knots: f64) -> f64;
}

/// Polar diagram with bilinear interpolation between grid points.
///
/// Wind speeds of 1 knot interpolate between the 0 and 2 knot rows, and wind
/// speeds above 10 knots extrapolate from the 9 and 10 knot rows.
///
/// # Examples
/// ```
/// use sailroute_core::{BoatSpeedModel, PolarVelocityModel};
///
/// let polar = PolarVelocityModel::default();
/// assert_eq!(polar.boat_speed(90, 6.0), 9.0);
/// assert_eq!(polar.boat_speed(0, 6.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PolarVelocityModel {
    table: PolarTable,
}

impl Default for PolarVelocityModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarVelocityModel {
    /// Model backed by [`DEFAULT_POLAR`].
    #[must_use]
    pub const fn new() -> Self {
        Self::from_table(DEFAULT_POLAR)
    }

    /// Model backed by a caller-supplied table.
    ///
    /// The first column should be zero so that dead upwind is unsailable.
    #[must_use]
    pub const fn from_table(table: PolarTable) -> Self {
        Self { table }
    }

    /// The underlying grid.
    #[must_use]
    pub const fn table(&self) -> &PolarTable {
        &self.table
    }

    fn cell(&self, speed_row: u32, angle_column: u16) -> f64 {
        usize::try_from(speed_row)
            .ok()
            .and_then(|row| self.table.get(row))
            .and_then(|row| row.get(usize::from(angle_column)))
            .copied()
            .unwrap_or_else(|| {
                warn!("polar lookup outside table at row {speed_row}, column {angle_column}");
                0.0
            })
    }
}

impl BoatSpeedModel for PolarVelocityModel {
    fn boat_speed(&self, wind_angle: u16, wind_speed_knots: f64) -> f64 {
        let angles = AngleBracket::enclosing(wind_angle);
        let speeds = SpeedBracket::enclosing(wind_speed_knots);

        let upper_row = interpolate(
            self.cell(speeds.lower + speeds.span, angles.upper_column()),
            self.cell(speeds.lower + speeds.span, angles.lower_column()),
            angles.multiplier,
        );
        let lower_row = interpolate(
            self.cell(speeds.lower, angles.upper_column()),
            self.cell(speeds.lower, angles.lower_column()),
            angles.multiplier,
        );
        interpolate(upper_row, lower_row, speeds.multiplier)
    }
}

/// Grid angles either side of a wind angle.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AngleBracket {
    lower: u16,
    upper: u16,
    multiplier: f64,
}

impl AngleBracket {
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "angles snap down to the enclosing 10 degree column"
    )]
    fn enclosing(wind_angle: u16) -> Self {
        let angle = wind_angle.min(HALF_CIRCLE);
        let lower = (angle / ANGLE_STEP) * ANGLE_STEP;
        let upper = if angle == lower {
            lower
        } else {
            lower + ANGLE_STEP
        };
        Self {
            lower,
            upper,
            multiplier: multiplier(f64::from(angle), f64::from(lower), f64::from(upper)),
        }
    }

    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "bracket bounds are exact multiples of the column width"
    )]
    const fn lower_column(&self) -> u16 {
        self.lower / ANGLE_STEP
    }

    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "bracket bounds are exact multiples of the column width"
    )]
    const fn upper_column(&self) -> u16 {
        self.upper / ANGLE_STEP
    }
}

/// Speed rows either side of a wind speed.
///
/// The upper row is `lower + span`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SpeedBracket {
    lower: u32,
    span: u32,
    multiplier: f64,
}

impl SpeedBracket {
    fn enclosing(wind_speed_knots: f64) -> Self {
        let (lower, upper) = if wind_speed_knots > f64::from(TOP_SPEED_ROW) {
            (TOP_SPEED_ROW - 1, TOP_SPEED_ROW)
        } else {
            Self::grid_rows(wind_speed_knots)
        };
        Self {
            lower,
            span: upper - lower,
            multiplier: multiplier(wind_speed_knots, f64::from(lower), f64::from(upper)),
        }
    }

    fn grid_rows(wind_speed_knots: f64) -> (u32, u32) {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "speeds here lie in 0..=10 and are floored first"
        )]
        let floor = wind_speed_knots.max(0.0).floor() as u32;
        let upper = if is_close(wind_speed_knots, f64::from(floor)) {
            floor
        } else {
            floor + 1
        };
        match (floor, upper) {
            (MISSING_SPEED_ROW, next) => (0, next.max(2)),
            (lower, MISSING_SPEED_ROW) => (lower, 2),
            bracket => bracket,
        }
    }
}

/// Position of `value` between `lower` and `upper` as a fraction of the span.
///
/// Zero when the bounds coincide; may exceed one when extrapolating.
#[expect(clippy::float_arithmetic, reason = "linear interpolation weights")]
fn multiplier(value: f64, lower: f64, upper: f64) -> f64 {
    let span = upper - lower;
    if span == 0.0 {
        0.0
    } else {
        (value - lower) / span
    }
}

#[expect(clippy::float_arithmetic, reason = "linear interpolation")]
fn interpolate(higher: f64, lower: f64, multiplier: f64) -> f64 {
    lower + (higher - lower) * multiplier
}
