//! NOAA sunrise/sunset equations.
//!
//! Low-precision solar coordinates (Meeus, as used by the NOAA solar
//! calculator) evaluated twice: once at noon of the base date, then again at
//! the first estimate of the event time. The event zenith is widened by the
//! atmospheric refraction expected at that zenith.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Latitudes beyond this are clamped; the hour-angle formula degenerates at
/// the poles.
const MAX_LATITUDE: f64 = 89.8;

const J2000: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;
const MINUTES_PER_DAY: f64 = 1_440.0;

/// Whether the sun is crossing the horizon upwards or downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Rising,
    Setting,
}

/// Why the sun never reaches the requested zenith on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoTransit {
    AlwaysAbove,
    AlwaysBelow,
}

/// Returns the instant the sun crosses `zenith` in `direction`.
///
/// The result is expressed relative to 00:00 UTC of `date` and may land on
/// the UTC day before or after it for locations far from Greenwich.
pub(crate) fn transit(
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
    zenith: f64,
    direction: Direction,
) -> Result<DateTime<Utc>, NoTransit> {
    let latitude = latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let zenith = zenith + refraction_at_zenith(zenith);

    let jd = julian_day(date);
    let estimate = |t| minutes_after_midnight(latitude, longitude, t, zenith, direction);
    let first = estimate(julian_century(jd))?;
    let minutes = estimate(julian_century(jd + first / MINUTES_PER_DAY))?;

    Ok(date.and_time(NaiveTime::MIN).and_utc() + minutes_to_delta(minutes))
}

fn minutes_after_midnight(
    latitude: f64,
    longitude: f64,
    t: f64,
    zenith: f64,
    direction: Direction,
) -> Result<f64, NoTransit> {
    let hour_angle = hour_angle(latitude, sun_declination(t), zenith, direction)?;
    let delta = -longitude - hour_angle.to_degrees();
    Ok(720.0 + 4.0 * delta - equation_of_time(t))
}

/// Truncates to whole microseconds, toward zero.
fn minutes_to_delta(minutes: f64) -> TimeDelta {
    let seconds = minutes * 60.0;
    let whole = seconds.trunc();
    let micros = ((seconds - whole) * 1e6).trunc();
    TimeDelta::seconds(whole as i64) + TimeDelta::microseconds(micros as i64)
}

/// Julian day number at 00:00 UT of `date`.
fn julian_day(date: NaiveDate) -> f64 {
    let (mut year, mut month) = (date.year(), date.month());
    if month <= 2 {
        year -= 1;
        month += 12;
    }
    let a = year / 100;
    let b = 2 - a + a / 4;
    (365.25 * f64::from(year + 4716)).trunc()
        + (30.6001 * f64::from(month + 1)).trunc()
        + f64::from(date.day())
        + f64::from(b)
        - 1524.5
}

fn julian_century(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

fn geom_mean_long_sun(t: f64) -> f64 {
    (280.46646 + t * (36000.76983 + 0.0003032 * t)).rem_euclid(360.0)
}

fn geom_mean_anomaly_sun(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

fn earth_orbit_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

fn sun_equation_of_center(t: f64) -> f64 {
    let m = geom_mean_anomaly_sun(t).to_radians();
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

fn omega(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

fn sun_apparent_longitude(t: f64) -> f64 {
    let true_longitude = geom_mean_long_sun(t) + sun_equation_of_center(t);
    true_longitude - 0.00569 - 0.00478 * omega(t).to_radians().sin()
}

fn obliquity_correction(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.815 + t * (0.00059 - t * 0.001813));
    let mean = 23.0 + (26.0 + seconds / 60.0) / 60.0;
    mean + 0.00256 * omega(t).to_radians().cos()
}

fn sun_declination(t: f64) -> f64 {
    let e = obliquity_correction(t).to_radians();
    let lambda = sun_apparent_longitude(t).to_radians();
    (e.sin() * lambda.sin()).asin().to_degrees()
}

/// Equation of time in minutes.
fn equation_of_time(t: f64) -> f64 {
    let l0 = geom_mean_long_sun(t).to_radians();
    let e = earth_orbit_eccentricity(t);
    let m = geom_mean_anomaly_sun(t).to_radians();
    let y = (obliquity_correction(t).to_radians() / 2.0).tan().powi(2);

    let etime = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    etime.to_degrees() * 4.0
}

/// Hour angle in radians; negative when setting.
fn hour_angle(
    latitude: f64,
    declination: f64,
    zenith: f64,
    direction: Direction,
) -> Result<f64, NoTransit> {
    let (lat, dec) = (latitude.to_radians(), declination.to_radians());
    let h = (zenith.to_radians().cos() - lat.sin() * dec.sin()) / (lat.cos() * dec.cos());
    if h > 1.0 {
        return Err(NoTransit::AlwaysBelow);
    }
    if h < -1.0 {
        return Err(NoTransit::AlwaysAbove);
    }
    let angle = h.acos();
    Ok(match direction {
        Direction::Rising => angle,
        Direction::Setting => -angle,
    })
}

/// Atmospheric refraction in degrees for a body at `zenith`.
fn refraction_at_zenith(zenith: f64) -> f64 {
    let elevation = 90.0 - zenith;
    if elevation >= 85.0 {
        return 0.0;
    }
    let te = elevation.to_radians().tan();
    let arcseconds = if elevation > 5.0 {
        58.1 / te - 0.07 / te.powi(3) + 0.000086 / te.powi(5)
    } else if elevation > -0.575 {
        let step = 103.4 + elevation * (-12.79 + elevation * 0.711);
        1735.0 + elevation * (-518.2 + elevation * step)
    } else {
        -20.774 / te
    };
    arcseconds / 3600.0
}
