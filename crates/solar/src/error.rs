//! Error types for sunsets-solar.

use chrono::NaiveDate;

/// Error type for all fallible operations in the sunsets-solar crate.
///
/// Validation variants are returned while building a [`Location`](crate::Location);
/// the remaining variants describe why sun times could not be resolved for
/// a particular date.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolarError {
    /// Returned when a location name is empty or whitespace.
    #[error("location name must not be empty")]
    EmptyName,

    /// Returned when a latitude is not a finite value in -90..=90.
    #[error("invalid latitude: {value} (must be between -90 and 90)")]
    InvalidLatitude {
        /// The latitude that was provided.
        value: f64,
    },

    /// Returned when a longitude is not a finite value in -180..=180.
    #[error("invalid longitude: {value} (must be between -180 and 180)")]
    InvalidLongitude {
        /// The longitude that was provided.
        value: f64,
    },

    /// Returned when a time-zone identifier is not in the IANA database.
    #[error("unknown time zone '{name}': {reason}")]
    UnknownTimezone {
        /// The identifier that was provided.
        name: String,
        /// Description of the lookup failure.
        reason: String,
    },

    /// Returned when the sun stays above the horizon for the whole day.
    #[error("sun does not set on {date} (polar day)")]
    PolarDay {
        /// The date that was requested.
        date: NaiveDate,
    },

    /// Returned when the sun stays below the horizon for the whole day.
    #[error("sun does not rise on {date} (polar night)")]
    PolarNight {
        /// The date that was requested.
        date: NaiveDate,
    },

    /// Returned when a computed sunrise is not strictly before its sunset.
    #[error("sunrise {sunrise} is not before sunset {sunset}")]
    InvertedTimes {
        /// Rendered sunrise instant.
        sunrise: String,
        /// Rendered sunset instant.
        sunset: String,
    },

    /// Returned when no local reference time exists for a date in the zone.
    #[error("no local time exists on {date} in the location's time zone")]
    NonexistentLocalTime {
        /// The date that was requested.
        date: NaiveDate,
    },

    /// Returned when a neighbouring day needed for the computation is not
    /// representable.
    #[error("date out of range near {date}")]
    DateOutOfRange {
        /// The date that was requested.
        date: NaiveDate,
    },

    /// Wraps an error reported by the solar position algorithm.
    #[error("solar position algorithm failed: {reason}")]
    Algorithm {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl From<solar_positioning::Error> for SolarError {
    fn from(e: solar_positioning::Error) -> Self {
        SolarError::Algorithm {
            reason: e.to_string(),
        }
    }
}
