//! Error types for the sunsets-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the sunsets-calendar crate.
///
/// Covers years outside the range representable by `chrono` and date
/// ranges whose start falls after their end.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year cannot be represented as a calendar date.
    #[error("invalid year: {year}")]
    InvalidYear {
        /// The year that was provided.
        year: i32,
    },

    /// Returned when a range is constructed with `start > end`.
    #[error("invalid date range: start {start} is after end {end}")]
    InvertedRange {
        /// Requested first day of the range.
        start: NaiveDate,
        /// Requested last day of the range.
        end: NaiveDate,
    },
}
