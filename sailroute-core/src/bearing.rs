//! Heading arithmetic on whole compass degrees.
//!
//! Headings are `u16` values in `0..360`, measured clockwise from north.
//! Arbitrary integer degrees are folded onto the compass rose with
//! [`normalize_heading`]; nothing here rejects out-of-range input.

/// Number of whole degrees on the compass rose.
pub const FULL_CIRCLE: u16 = 360;

/// Half of the compass rose, the largest possible angular distance.
pub const HALF_CIRCLE: u16 = 180;

/// Relative tolerance used by [`is_close`].
pub const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Absolute tolerance used by [`is_close`].
pub const ABSOLUTE_TOLERANCE: f64 = 0.0;

/// Knots per metre per second.
const KNOTS_PER_METRE_PER_SECOND: f64 = 1.944;

/// Direction of a one-degree step around the compass rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Increasing headings.
    Clockwise,
    /// Decreasing headings.
    Anticlockwise,
}

impl Rotation {
    /// `+1` for [`Rotation::Clockwise`], `-1` otherwise.
    #[must_use]
    pub const fn signum(self) -> i32 {
        match self {
            Self::Clockwise => 1,
            Self::Anticlockwise => -1,
        }
    }

    /// Advance `heading` by one degree in this direction.
    ///
    /// # Examples
    /// ```
    /// use sailroute_core::bearing::Rotation;
    ///
    /// assert_eq!(Rotation::Clockwise.step(359), 0);
    /// assert_eq!(Rotation::Anticlockwise.step(0), 359);
    /// ```
    #[must_use]
    pub fn step(self, heading: u16) -> u16 {
        normalize_heading(i32::from(heading) + self.signum())
    }
}

/// Fold any integer number of degrees into `0..360`.
///
/// # Examples
/// ```
/// use sailroute_core::bearing::normalize_heading;
///
/// assert_eq!(normalize_heading(-90), 270);
/// assert_eq!(normalize_heading(720), 0);
/// ```
#[must_use]
pub fn normalize_heading(degrees: i32) -> u16 {
    let folded = degrees.rem_euclid(i32::from(FULL_CIRCLE));
    // `rem_euclid` keeps the value inside `0..360`.
    u16::try_from(folded).unwrap_or_default()
}

/// Unsigned angle between two headings, in `0..=180`.
///
/// # Examples
/// ```
/// use sailroute_core::bearing::angular_distance;
///
/// assert_eq!(angular_distance(350, 10), 20);
/// assert_eq!(angular_distance(90, 270), 180);
/// ```
#[must_use]
pub fn angular_distance(from: u16, to: u16) -> u16 {
    let phi = normalize_heading(i32::from(to) - i32::from(from));
    if phi > HALF_CIRCLE {
        FULL_CIRCLE - phi
    } else {
        phi
    }
}

/// The one-degree step from `from` that brings it closer to `to`.
///
/// Only the clockwise step is probed: exact reciprocals resolve to
/// [`Rotation::Clockwise`] and `from == to` resolves to
/// [`Rotation::Anticlockwise`].
#[must_use]
pub fn closest_rotation(from: u16, to: u16) -> Rotation {
    let initial = angular_distance(from, to);
    let stepped = angular_distance(Rotation::Clockwise.step(from), to);
    if stepped < initial {
        Rotation::Clockwise
    } else {
        Rotation::Anticlockwise
    }
}

/// The heading pointing the opposite way.
#[must_use]
pub fn reciprocal(heading: u16) -> u16 {
    normalize_heading(i32::from(heading) + i32::from(HALF_CIRCLE))
}

/// Signed angle between a sailing heading and the heading the wind comes from.
///
/// The magnitude is [`angular_distance`]; the sign is positive when the
/// shortest rotation from the wind heading toward `heading` is clockwise.
///
/// # Examples
/// ```
/// use sailroute_core::bearing::relative_wind_bearing;
///
/// assert_eq!(relative_wind_bearing(45, 0), 45);
/// assert_eq!(relative_wind_bearing(315, 0), -45);
/// ```
#[must_use]
pub fn relative_wind_bearing(heading: u16, wind_heading: u16) -> i16 {
    #[expect(
        clippy::cast_possible_wrap,
        reason = "angular distances never exceed 180 degrees"
    )]
    let magnitude = angular_distance(heading, wind_heading) as i16;
    match closest_rotation(wind_heading, heading) {
        Rotation::Clockwise => magnitude,
        Rotation::Anticlockwise => -magnitude,
    }
}

/// Compare two reals with a relative tolerance of `1e-9` and no absolute slack.
///
/// # Examples
/// ```
/// use sailroute_core::bearing::is_close;
///
/// assert!(is_close(1.0, 1.0 + 1e-12));
/// assert!(!is_close(0.0, 1e-300));
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "tolerance comparison is inherently floating point"
)]
#[must_use]
pub fn is_close(lhs: f64, rhs: f64) -> bool {
    let scale = lhs.abs().max(rhs.abs());
    (lhs - rhs).abs() <= (RELATIVE_TOLERANCE * scale).max(ABSOLUTE_TOLERANCE)
}

/// Convert a speed in knots to metres per second.
#[expect(clippy::float_arithmetic, reason = "unit conversion")]
#[must_use]
pub fn knots_to_metres_per_second(knots: f64) -> f64 {
    knots / KNOTS_PER_METRE_PER_SECOND
}

/// Whole degrees as radians.
#[must_use]
pub fn degrees_to_radians(degrees: u16) -> f64 {
    f64::from(degrees).to_radians()
}
