//! Validated inclusive date range.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::sequence::DateIter;

/// An inclusive range of calendar dates with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvertedRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range covering January 1 through December 31 of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year` is outside the range
    /// supported by `chrono`.
    pub fn year(year: i32) -> Result<Self, CalendarError> {
        let start =
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CalendarError::InvalidYear { year })?;
        let end =
            NaiveDate::from_ymd_opt(year, 12, 31).ok_or(CalendarError::InvalidYear { year })?;
        Ok(Self { start, end })
    }

    /// Returns the first day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the number of days in the range, counting both endpoints.
    pub fn n_days(&self) -> usize {
        // start <= end is guaranteed by the constructors.
        (self.end - self.start).num_days() as usize + 1
    }

    /// Returns `true` if `date` lies within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// If the range is exactly one calendar year, returns that year.
    pub fn as_year(&self) -> Option<i32> {
        let year = self.start.year();
        let whole_year = self.start.ordinal() == 1
            && self.end.year() == year
            && self.end.month() == 12
            && self.end.day() == 31;
        whole_year.then_some(year)
    }

    /// Returns a fresh ascending iterator over every day in the range.
    pub fn iter(&self) -> DateIter {
        DateIter::new(self.start, self.end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_year() {
            Some(year) => write!(f, "{year}"),
            None => write!(f, "{} to {}", self.start, self.end),
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = DateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_valid() {
        let range = DateRange::new(date(2026, 1, 1), date(2026, 1, 31)).unwrap();
        assert_eq!(range.start(), date(2026, 1, 1));
        assert_eq!(range.end(), date(2026, 1, 31));
        assert_eq!(range.n_days(), 31);
    }

    #[test]
    fn new_single_day() {
        let range = DateRange::new(date(2026, 6, 21), date(2026, 6, 21)).unwrap();
        assert_eq!(range.n_days(), 1);
    }

    #[test]
    fn new_inverted() {
        let err = DateRange::new(date(2026, 2, 1), date(2026, 1, 31)).unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvertedRange {
                start: date(2026, 2, 1),
                end: date(2026, 1, 31),
            }
        );
    }

    #[test]
    fn year_common() {
        let range = DateRange::year(2026).unwrap();
        assert_eq!(range.start(), date(2026, 1, 1));
        assert_eq!(range.end(), date(2026, 12, 31));
        assert_eq!(range.n_days(), 365);
    }

    #[test]
    fn year_leap() {
        assert_eq!(DateRange::year(2028).unwrap().n_days(), 366);
    }

    #[test]
    fn year_out_of_range() {
        let err = DateRange::year(i32::MAX).unwrap_err();
        assert_eq!(err, CalendarError::InvalidYear { year: i32::MAX });
    }

    #[test]
    fn contains_endpoints() {
        let range = DateRange::new(date(2026, 3, 1), date(2026, 3, 31)).unwrap();
        assert!(range.contains(date(2026, 3, 1)));
        assert!(range.contains(date(2026, 3, 31)));
        assert!(!range.contains(date(2026, 2, 28)));
        assert!(!range.contains(date(2026, 4, 1)));
    }

    #[test]
    fn as_year_detection() {
        assert_eq!(DateRange::year(2026).unwrap().as_year(), Some(2026));
        let partial = DateRange::new(date(2026, 1, 1), date(2026, 12, 30)).unwrap();
        assert_eq!(partial.as_year(), None);
        let spanning = DateRange::new(date(2026, 1, 1), date(2027, 12, 31)).unwrap();
        assert_eq!(spanning.as_year(), None);
    }

    #[test]
    fn display() {
        assert_eq!(DateRange::year(2026).unwrap().to_string(), "2026");
        let range = DateRange::new(date(2026, 3, 1), date(2026, 3, 31)).unwrap();
        assert_eq!(range.to_string(), "2026-03-01 to 2026-03-31");
    }

    #[test]
    fn iteration_is_restartable() {
        let range = DateRange::new(date(2026, 12, 30), date(2027, 1, 2)).unwrap();
        let first: Vec<_> = range.iter().collect();
        let second: Vec<_> = (&range).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }
}
