//! Human-readable sailing instructions for a route.

use sailroute_core::Route;

const METRES_PER_MILE: f64 = 1609.0;
const FEET_PER_METRE: f64 = 3.281;
const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Arrival legs this short are not worth announcing.
const MIN_ARRIVAL_LEG_M: f64 = 1.0;

/// Wind bearing with an explicit sign; dead downwind reads `180°` either side.
pub(crate) fn format_wind_bearing(bearing: i16) -> String {
    match bearing {
        -180 | 180 => "180°".to_owned(),
        positive if positive > 0 => format!("+{positive}°"),
        other => format!("{other}°"),
    }
}

/// Distance in miles, or in feet below a tenth of a mile.
#[expect(clippy::float_arithmetic, reason = "unit conversion")]
pub(crate) fn format_distance(metres: f64) -> String {
    let miles = metres / METRES_PER_MILE;
    let feet = metres * FEET_PER_METRE;
    if miles >= 100.0 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "long distances are shown in whole miles"
        )]
        let whole = miles.trunc() as i64;
        format!("{whole} mi")
    } else if miles >= 0.1 {
        let tenths = format!("{miles:.1}");
        let trimmed = tenths.strip_suffix(".0").unwrap_or(&tenths);
        format!("{trimmed} mi")
    } else if feet > 0.0 {
        format!("{feet:.0} ft")
    } else {
        "0 ft".to_owned()
    }
}

/// Coarse duration in days, hours and minutes; never less than a minute.
pub(crate) fn format_duration(seconds: f64) -> String {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "durations are rounded and clamped to non-negative seconds"
    )]
    let total = seconds.max(0.0).round() as u64;
    let days = total.div_euclid(SECONDS_PER_DAY);
    let hours = total.rem_euclid(SECONDS_PER_DAY).div_euclid(SECONDS_PER_HOUR);
    let minutes = total.rem_euclid(SECONDS_PER_HOUR).div_euclid(SECONDS_PER_MINUTE);
    match (days, hours, minutes) {
        (0, 0, 0) => "1 min".to_owned(),
        (0, 0, m) => format!("{m} min"),
        (0, h, 0) => format!("{h} hr"),
        (0, h, m) => format!("{h} hr {m} min"),
        (d, 0, _) => format!("{d} d"),
        (d, h, _) => format!("{d} d {h} hr"),
    }
}

/// Lines of instructions for sailing `route`.
pub(crate) fn render(route: &Route) -> Vec<String> {
    if !route.is_sailable() {
        return vec!["No sailable route to the destination in this wind".to_owned()];
    }
    if route.has_arrived() {
        return vec!["You have reached your destination".to_owned()];
    }
    let mut lines = vec![format!(
        "Sail {} to wind for {} (compass heading {}°)",
        format_wind_bearing(route.departure_wind_bearing()),
        format_distance(route.departure_distance()),
        route.departure_heading()
    )];
    if let Some(arrival) = route.arrival_leg()
        && arrival.distance_m > MIN_ARRIVAL_LEG_M
    {
        lines.push(format!(
            "Then {} ({}°) for {}",
            format_wind_bearing(arrival.wind_bearing),
            arrival.heading,
            format_distance(arrival.distance_m)
        ));
    }
    lines.push(format!(
        "Estimated time {}",
        format_duration(route.duration())
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sailroute_core::{Leg, UNSAILABLE_DURATION};

    #[rstest]
    #[case(45, "+45°")]
    #[case(-30, "-30°")]
    #[case(0, "0°")]
    #[case(180, "180°")]
    #[case(-180, "180°")]
    fn formats_wind_bearings(#[case] bearing: i16, #[case] expected: &str) {
        assert_eq!(format_wind_bearing(bearing), expected);
    }

    #[rstest]
    #[case(0.0, "0 ft")]
    #[case(10.0, "33 ft")]
    #[case(160.0, "525 ft")]
    #[case(1609.0, "1 mi")]
    #[case(2000.0, "1.2 mi")]
    #[case(160_900.0, "100 mi")]
    #[case(250_000.0, "155 mi")]
    fn formats_distances(#[case] metres: f64, #[case] expected: &str) {
        assert_eq!(format_distance(metres), expected);
    }

    #[rstest]
    #[case(0.0, "1 min")]
    #[case(29.0, "1 min")]
    #[case(851.9, "14 min")]
    #[case(3_600.0, "1 hr")]
    #[case(5_400.0, "1 hr 30 min")]
    #[case(86_400.0, "1 d")]
    #[case(97_200.0, "1 d 3 hr")]
    fn formats_durations(#[case] seconds: f64, #[case] expected: &str) {
        assert_eq!(format_duration(seconds), expected);
    }

    #[rstest]
    fn renders_a_tack() {
        let route = Route::tack(
            Leg {
                heading: 50,
                distance_m: 1555.7,
                wind_bearing: 50,
            },
            Leg {
                heading: 310,
                distance_m: 1555.7,
                wind_bearing: -50,
            },
            851.9,
        );
        assert_eq!(
            render(&route),
            vec![
                "Sail +50° to wind for 1 mi (compass heading 50°)".to_owned(),
                "Then -50° (310°) for 1 mi".to_owned(),
                "Estimated time 14 min".to_owned(),
            ]
        );
    }

    #[rstest]
    fn renders_a_direct_route_without_second_leg() {
        let route = Route::direct(
            Leg {
                heading: 90,
                distance_m: 1500.0,
                wind_bearing: 90,
            },
            285.9,
        );
        let lines = render(&route);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Sail +90° to wind for 0.9 mi (compass heading 90°)");
    }

    #[rstest]
    #[case(0.0, "You have reached your destination")]
    #[case(UNSAILABLE_DURATION, "No sailable route to the destination in this wind")]
    fn renders_terminal_states(#[case] duration: f64, #[case] expected: &str) {
        let route = Route::direct(
            Leg {
                heading: 0,
                distance_m: 0.0,
                wind_bearing: 0,
            },
            duration,
        );
        assert_eq!(render(&route), vec![expected.to_owned()]);
    }
}
