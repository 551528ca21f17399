use chrono::{Datelike, NaiveDate};
use sunsets_calendar::{DateRange, days_in_year};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn full_year_month_boundaries() {
    let dates: Vec<_> = DateRange::year(2026).unwrap().iter().collect();
    assert_eq!(dates.len(), 365);

    // Index 0: Jan 1
    assert_eq!(dates[0], date(2026, 1, 1));
    // Index 30: Jan 31
    assert_eq!(dates[30], date(2026, 1, 31));
    // Index 31: Feb 1
    assert_eq!(dates[31], date(2026, 2, 1));
    // Index 58: Feb 28
    assert_eq!(dates[58], date(2026, 2, 28));
    // Index 59: Mar 1 (no leap day in 2026)
    assert_eq!(dates[59], date(2026, 3, 1));
    // Index 364: Dec 31
    assert_eq!(dates[364], date(2026, 12, 31));
}

#[test]
fn leap_year_includes_feb_29() {
    let dates: Vec<_> = DateRange::year(2028).unwrap().iter().collect();
    assert_eq!(dates.len(), 366);
    assert_eq!(dates[59], date(2028, 2, 29));
    assert_eq!(dates[60], date(2028, 3, 1));
    assert_eq!(dates[365], date(2028, 12, 31));
}

#[test]
fn multi_year_transitions() {
    let range = DateRange::new(date(2027, 1, 1), date(2028, 12, 31)).unwrap();
    let dates: Vec<_> = range.iter().collect();
    assert_eq!(dates.len(), 365 + 366);

    // Index 364: Dec 31, 2027
    assert_eq!(dates[364], date(2027, 12, 31));
    // Index 365: Jan 1, 2028
    assert_eq!(dates[365], date(2028, 1, 1));
    assert_eq!(*dates.last().unwrap(), date(2028, 12, 31));
}

#[test]
fn strictly_ascending_without_gaps() {
    let range = DateRange::new(date(2027, 11, 15), date(2028, 3, 15)).unwrap();
    let dates: Vec<_> = range.iter().collect();
    for pair in dates.windows(2) {
        assert_eq!(pair[0].succ_opt(), Some(pair[1]), "gap after {}", pair[0]);
    }
}

#[test]
fn length_always_matches() {
    let start = date(2024, 1, 1);
    for n_days in [1_i64, 2, 59, 60, 366, 1000] {
        let end = start + chrono::Duration::days(n_days - 1);
        let range = DateRange::new(start, end).unwrap();
        let count = range.iter().count();
        assert_eq!(count, n_days as usize, "expected length {n_days}, got {count}");
        assert_eq!(range.n_days(), count);
    }
}

#[test]
fn year_length_matches_iteration() {
    for year in [1900, 2000, 2024, 2026, 2100] {
        let range = DateRange::year(year).unwrap();
        assert_eq!(range.iter().count(), days_in_year(year), "year {year}");
        assert!(range.iter().all(|d| d.year() == year));
    }
}
