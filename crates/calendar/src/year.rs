//! Year-length helpers for the proleptic Gregorian calendar.

use chrono::NaiveDate;

/// Returns `true` if `year` contains February 29.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> usize {
    if is_leap_year(year) { 366 } else { 365 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_year() {
        assert!(!is_leap_year(2026));
        assert_eq!(days_in_year(2026), 365);
    }

    #[test]
    fn divisible_by_four() {
        assert!(is_leap_year(2028));
        assert_eq!(days_in_year(2028), 366);
    }

    #[test]
    fn century_rules() {
        // 1900 is divisible by 100 but not 400; 2000 is divisible by 400.
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2100));
    }
}
