//! Date sniffing and the canonical system date representation

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

/// Format of the canonical system date string (`2024-01-05 15:04:05`)
pub const SYS_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shape check run before any chrono parsing is attempted
static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\d{4}-\d{2}-\d{2}(?:[ T]\d{2}:\d{2}(?::\d{2}(?:\.\d{1,9})?)?)?(?:Z|[+-]\d{2}:?\d{2})?$",
    )
    .expect("date shape pattern is valid")
});

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a string that looks like a date
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS[.fff]]`, the same with a `T`
/// separator, and RFC 3339 timestamps. Offsets are dropped and the wall-clock
/// time as written is kept.
pub fn parse_date_str(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if !DATE_SHAPE.is_match(s) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Render a date as the canonical system date string
pub fn to_sys_date_str(date: &NaiveDateTime) -> String {
    date.format(SYS_DATE_FORMAT).to_string()
}

/// Milliseconds elapsed since midnight
pub fn time_of_day_ms(date: &NaiveDateTime) -> i64 {
    let time = date.time();
    i64::from(time.num_seconds_from_midnight()) * 1000 + i64::from(time.nanosecond() / 1_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_date_only() {
        assert_eq!(parse_date_str("2024-01-05"), Some(dt(2024, 1, 5, 0, 0, 0)));
    }

    #[test]
    fn test_parse_sys_date() {
        assert_eq!(
            parse_date_str("2024-01-05 15:04:05"),
            Some(dt(2024, 1, 5, 15, 4, 5))
        );
        assert_eq!(
            parse_date_str("2024-01-05T15:04"),
            Some(dt(2024, 1, 5, 15, 4, 0))
        );
    }

    #[test]
    fn test_parse_rfc3339_keeps_wall_clock() {
        assert_eq!(
            parse_date_str("2024-01-05T15:04:05+02:00"),
            Some(dt(2024, 1, 5, 15, 4, 5))
        );
        assert_eq!(
            parse_date_str("2024-01-05T15:04:05.250Z"),
            Some(dt(2024, 1, 5, 15, 4, 5) + chrono::Duration::milliseconds(250))
        );
    }

    #[test]
    fn test_rejects_non_dates() {
        assert!(parse_date_str("hello").is_none());
        assert!(parse_date_str("2024").is_none());
        assert!(parse_date_str("12/01/2024").is_none());
        assert!(parse_date_str("2024-13-45").is_none());
    }

    #[test]
    fn test_sys_date_and_time_of_day() {
        let date = dt(2024, 1, 5, 15, 4, 5);
        assert_eq!(to_sys_date_str(&date), "2024-01-05 15:04:05");
        assert_eq!(time_of_day_ms(&date), (15 * 3600 + 4 * 60 + 5) * 1000);
        assert_eq!(time_of_day_ms(&dt(2024, 1, 5, 0, 0, 0)), 0);
    }
}
