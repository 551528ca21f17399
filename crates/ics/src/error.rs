//! Error types for sunsets-ics.

use std::path::PathBuf;

use chrono::NaiveDate;
use sunsets_solar::SolarError;

/// Error type for all fallible operations in the sunsets-ics crate.
#[derive(Debug, thiserror::Error)]
pub enum IcsError {
    /// Returned when sun times cannot be resolved for one date of the run.
    ///
    /// The run stops at the first such date; no calendar is produced.
    #[error("failed to compute sun times for {location} on {date}")]
    SunTimes {
        /// Name of the location being processed.
        location: String,
        /// The date whose resolution failed.
        date: NaiveDate,
        /// The underlying resolution failure.
        #[source]
        source: SolarError,
    },

    /// Returned when the output path cannot receive a file.
    #[error("invalid output path {}: {reason}", path.display())]
    InvalidOutputPath {
        /// Path that was rejected.
        path: PathBuf,
        /// Why the path was rejected.
        reason: String,
    },

    /// Returned when writing the calendar file fails.
    #[error("failed to write {}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
