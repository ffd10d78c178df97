use chrono::{DateTime, Duration, Local, NaiveDate, ParseResult};

/// Drops time-of-day from a local instant. All engine math runs on
/// plain calendar dates; callers supply a consistent local "now".
pub fn today(now: DateTime<Local>) -> NaiveDate {
    now.date_naive()
}

pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso_date(s: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
}

pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::days(n)
}

/// Signed whole-day difference `a - b`.
pub fn diff_days(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn iso_round_trip() {
        for date in [d(2025, 1, 1), d(2024, 2, 29), d(1999, 12, 31), d(2025, 7, 4)] {
            let iso = to_iso_date(date);
            assert_eq!(parse_iso_date(&iso).unwrap(), date);
        }
    }

    #[test]
    fn iso_is_zero_padded() {
        assert_eq!(to_iso_date(d(2025, 3, 7)), "2025-03-07");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_iso_date("not-a-date").is_err());
        assert!(parse_iso_date("2025-13-01").is_err());
        assert!(parse_iso_date("").is_err());
    }

    #[test]
    fn add_days_spans_month_and_year_boundaries() {
        assert_eq!(add_days(d(2025, 1, 31), 1), d(2025, 2, 1));
        assert_eq!(add_days(d(2024, 12, 31), 1), d(2025, 1, 1));
        assert_eq!(add_days(d(2024, 3, 1), -1), d(2024, 2, 29));
        assert_eq!(add_days(d(2025, 1, 1), 365), d(2026, 1, 1));
    }

    #[test]
    fn diff_days_is_antisymmetric() {
        let a = d(2025, 1, 3);
        let b = d(2025, 2, 14);
        assert_eq!(diff_days(a, a), 0);
        assert_eq!(diff_days(a, b), -diff_days(b, a));
        assert_eq!(diff_days(b, a), 42);
    }
}
