//! Stay date parsing and length-of-stay arithmetic.
//!
//! Scraped listings carry ISO dates (`2026-02-16`); some exports include a time
//! component. Both are parsed to a `NaiveDateTime` at millisecond precision.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const MILLIS_PER_DAY: i64 = 86_400_000;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Parse a check-in or check-out value.
///
/// Returns `None` if the value is not a recognizable date or datetime.
/// Callers decide whether that is fatal; blank values should be filtered
/// out before calling.
pub fn parse_stay_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }

    None
}

/// Whole days between check-in and check-out.
///
/// Partial days are floored, so a negative duration of half a day counts as
/// -1. Equal dates give 0 and inverted dates give a negative count.
pub fn nights_between(checkin: NaiveDateTime, checkout: NaiveDateTime) -> i64 {
    (checkout - checkin)
        .num_milliseconds()
        .div_euclid(MILLIS_PER_DAY)
}

/// Milliseconds since the Unix epoch, the physical value of a Polars
/// `Datetime(Milliseconds)` column.
pub fn epoch_millis(value: NaiveDateTime) -> i64 {
    value.and_utc().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_stay_date("2026-02-16"), Some(date(2026, 2, 16)));
        assert_eq!(parse_stay_date("  2026-02-16  "), Some(date(2026, 2, 16)));
        assert_eq!(parse_stay_date("2026/02/16"), Some(date(2026, 2, 16)));
    }

    #[test]
    fn test_parse_datetime() {
        let parsed = parse_stay_date("2026-02-16 14:30:00").unwrap();
        assert_eq!(parsed.format("%H:%M").to_string(), "14:30");

        let parsed = parse_stay_date("2026-02-16T14:30:00.250").unwrap();
        assert_eq!(parsed.format("%H:%M:%S%.3f").to_string(), "14:30:00.250");

        // Rendering of an already-typed Polars datetime cast back to text
        let parsed = parse_stay_date("2026-02-16 00:00:00.000").unwrap();
        assert_eq!(parsed, date(2026, 2, 16));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_stay_date(""), None);
        assert_eq!(parse_stay_date("N/A"), None);
        assert_eq!(parse_stay_date("2026-02-30"), None);
        assert_eq!(parse_stay_date("16 de febrero"), None);
    }

    #[test]
    fn test_nights_between() {
        assert_eq!(nights_between(date(2026, 2, 16), date(2026, 2, 18)), 2);
        assert_eq!(nights_between(date(2026, 2, 16), date(2026, 2, 16)), 0);
        assert_eq!(nights_between(date(2026, 2, 18), date(2026, 2, 16)), -2);
        assert_eq!(nights_between(date(2026, 2, 28), date(2026, 3, 1)), 1);
    }

    #[test]
    fn test_nights_between_floors_partial_days() {
        let checkin = parse_stay_date("2026-02-16 22:00:00").unwrap();
        let checkout = parse_stay_date("2026-02-18 10:00:00").unwrap();
        assert_eq!(nights_between(checkin, checkout), 1);
        assert_eq!(nights_between(checkout, checkin), -2);
    }

    #[test]
    fn test_epoch_millis() {
        assert_eq!(epoch_millis(date(1970, 1, 2)), MILLIS_PER_DAY);
    }
}
