//! Fixed-format event description.

use chrono::{DateTime, TimeDelta};
use chrono_tz::Tz;
use sunsets_solar::{Location, SunHorizon, SunTimes};

/// Local timestamp with the zone abbreviation in effect at that instant.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Renders a duration as `H:MM:SS`, truncated to whole seconds.
///
/// Hours are not padded and may exceed 23; minutes and seconds always have
/// two digits. Negative durations get a leading `-`.
pub fn format_daylight(duration: TimeDelta) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();
    let (hours, rem) = (total / 3600, total % 3600);
    let (minutes, seconds) = (rem / 60, rem % 60);
    format!("{sign}{hours}:{minutes:02}:{seconds:02}")
}

/// Builds the four-line description of one day's sun times.
///
/// ```text
/// Daylight: 9:18:49
/// Sunrise: 2026-01-01 07:20:20 EST
/// Sunset: 2026-01-01 16:39:10 EST
/// Location: New York, NY (40.7128, -74.006)
/// ```
///
/// Coordinates use the shortest decimal form that round-trips. The output is
/// a pure function of its inputs and carries no trailing newline.
pub fn describe(location: &Location, sunrise: &DateTime<Tz>, sunset: &DateTime<Tz>) -> String {
    let daylight = sunset.clone() - sunrise.clone();
    [
        format!("Daylight: {}", format_daylight(daylight)),
        format!("Sunrise: {}", sunrise.format(TIMESTAMP_FORMAT)),
        format!("Sunset: {}", sunset.format(TIMESTAMP_FORMAT)),
        format!(
            "Location: {} ({}, {})",
            location.name(),
            location.latitude(),
            location.longitude()
        ),
    ]
    .join("\n")
}

/// Describes one resolved day.
///
/// Identical to [`describe`] for standard sunrise/sunset; twilight horizons
/// get a fifth `Horizon:` line naming what the times measure.
pub fn describe_times(location: &Location, times: &SunTimes) -> String {
    let mut text = describe(location, times.sunrise(), times.sunset());
    if times.horizon() != SunHorizon::SunriseSunset {
        text.push_str("\nHorizon: ");
        text.push_str(times.horizon().label());
    }
    text
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};
    use chrono_tz::America::New_York;

    use super::*;

    fn nyc() -> Location {
        Location::new("New York, NY", 40.7128, -74.0060, "America/New_York").unwrap()
    }

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, micro: u32) -> DateTime<Tz> {
        let naive = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_micro_opt(h, mi, s, micro)
            .unwrap();
        New_York.from_local_datetime(&naive).single().unwrap()
    }

    #[test]
    fn daylight_basic() {
        assert_eq!(format_daylight(TimeDelta::seconds(33_529)), "9:18:49");
    }

    #[test]
    fn daylight_zero_padding() {
        assert_eq!(format_daylight(TimeDelta::seconds(3600 + 5)), "1:00:05");
        assert_eq!(format_daylight(TimeDelta::zero()), "0:00:00");
    }

    #[test]
    fn daylight_truncates_fraction() {
        let d = TimeDelta::seconds(59) + TimeDelta::milliseconds(999);
        assert_eq!(format_daylight(d), "0:00:59");
    }

    #[test]
    fn daylight_over_a_day() {
        assert_eq!(format_daylight(TimeDelta::hours(25)), "25:00:00");
    }

    #[test]
    fn daylight_negative() {
        assert_eq!(format_daylight(TimeDelta::seconds(-61)), "-0:01:01");
    }

    #[test]
    fn describe_whole_seconds() {
        let sunrise = local(2026, 1, 1, 7, 30, 0, 0);
        let sunset = local(2026, 1, 1, 17, 45, 0, 0);
        let expected = "Daylight: 10:15:00\n\
                        Sunrise: 2026-01-01 07:30:00 EST\n\
                        Sunset: 2026-01-01 17:45:00 EST\n\
                        Location: New York, NY (40.7128, -74.006)";
        assert_eq!(describe(&nyc(), &sunrise, &sunset), expected);
    }

    #[test]
    fn describe_new_york_new_years_day() {
        // Fractional seconds: the difference truncates to 9:18:49 and each
        // timestamp drops its fraction.
        let sunrise = local(2026, 1, 1, 7, 20, 20, 500_000);
        let sunset = local(2026, 1, 1, 16, 39, 10, 142_530);
        let expected = "Daylight: 9:18:49\n\
                        Sunrise: 2026-01-01 07:20:20 EST\n\
                        Sunset: 2026-01-01 16:39:10 EST\n\
                        Location: New York, NY (40.7128, -74.006)";
        assert_eq!(describe(&nyc(), &sunrise, &sunset), expected);
    }

    #[test]
    fn describe_daylight_saving_abbreviation() {
        let sunrise = local(2026, 7, 1, 5, 28, 0, 0);
        let sunset = local(2026, 7, 1, 20, 31, 0, 0);
        let text = describe(&nyc(), &sunrise, &sunset);
        assert!(text.contains("Sunrise: 2026-07-01 05:28:00 EDT"), "{text}");
        assert!(text.contains("Sunset: 2026-07-01 20:31:00 EDT"), "{text}");
    }

    #[test]
    fn describe_is_deterministic() {
        let sunrise = local(2026, 3, 9, 7, 13, 1, 1);
        let sunset = local(2026, 3, 9, 19, 2, 3, 4);
        let a = describe(&nyc(), &sunrise, &sunset);
        let b = describe(&nyc(), &sunrise, &sunset);
        assert_eq!(a, b);
        assert!(!a.ends_with('\n'));
        assert_eq!(a.lines().count(), 4);
    }

    #[test]
    fn describe_times_standard_horizon_has_four_lines() {
        let sunrise = local(2026, 1, 1, 7, 20, 20, 0);
        let sunset = local(2026, 1, 1, 16, 39, 10, 0);
        let times = SunTimes::new(sunrise.date_naive(), sunrise.clone(), sunset.clone()).unwrap();
        assert_eq!(
            describe_times(&nyc(), &times),
            describe(&nyc(), &sunrise, &sunset)
        );
    }

    #[test]
    fn describe_times_names_twilight_horizon() {
        let dawn = local(2026, 1, 1, 6, 48, 56, 0);
        let dusk = local(2026, 1, 1, 17, 10, 34, 0);
        let times = SunTimes::new(dawn.date_naive(), dawn, dusk)
            .unwrap()
            .with_horizon(SunHorizon::Civil);
        let text = describe_times(&nyc(), &times);
        assert_eq!(text.lines().count(), 5);
        assert!(text.ends_with("\nHorizon: civil twilight"), "{text}");
    }

    #[test]
    fn describe_southern_coordinates() {
        let sydney = Location::new("Sydney", -33.8688, 151.2093, "Australia/Sydney").unwrap();
        let tz = sydney.timezone();
        let sunrise = tz.with_ymd_and_hms(2026, 1, 15, 6, 0, 0).unwrap();
        let sunset = tz.with_ymd_and_hms(2026, 1, 15, 20, 8, 0).unwrap();
        let text = describe(&sydney, &sunrise, &sunset);
        assert!(text.ends_with("Location: Sydney (-33.8688, 151.2093)"), "{text}");
        assert!(text.contains("AEDT"), "{text}");
    }
}
