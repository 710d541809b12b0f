//! Lenient parsing of the provider's date and time strings.
//!
//! Events arrive with a `DD/MM/YYYY` date and a `HH:MM` hour in separate
//! fields. Extraction is positional (digit groups separated by any non-digit
//! run) and structural failure of either field falls back to the current
//! local time instead of failing the whole response.

use std::sync::LazyLock;

use chrono::{DateTime, Local, TimeZone};
use regex::Regex;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?<day>0[1-9]|[12][0-9]|3[01])\D*(?<month>0[1-9]|1[0-2])\D*(?<year>[0-9]{4})")
        .expect("valid date pattern")
});

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?<hour>[01][0-9]|2[0-3])\D*(?<minute>[0-5][0-9])").expect("valid time pattern")
});

/// Extract (year, month, day) from a `DD/MM/YYYY`-shaped string.
/// Month is 1-indexed, as chrono expects.
pub fn extract_date(s: &str) -> Option<(i32, u32, u32)> {
    let caps = DATE_RE.captures(s)?;
    let day = caps["day"].parse().ok()?;
    let month = caps["month"].parse().ok()?;
    let year = caps["year"].parse().ok()?;
    Some((year, month, day))
}

/// Extract (hour, minute) from a `HH:MM`-shaped string.
pub fn extract_time(s: &str) -> Option<(u32, u32)> {
    let caps = TIME_RE.captures(s)?;
    let hour = caps["hour"].parse().ok()?;
    let minute = caps["minute"].parse().ok()?;
    Some((hour, minute))
}

/// Combine the provider's date and hour strings into one local timestamp.
///
/// If either string fails structural extraction the current time is
/// substituted. That is deliberate: a single garbled event must not fail the
/// whole lookup.
pub fn combine_date_time(date: &str, hour: &str) -> DateTime<Local> {
    let parsed = extract_date(date).zip(extract_time(hour)).and_then(
        |((year, month, day), (h, m))| Local.with_ymd_and_hms(year, month, day, h, m, 0).single(),
    );
    parsed.unwrap_or_else(Local::now)
}

/// Parse the `ultimo` field, which shows up either as RFC 3339 or as a
/// `DD/MM/YYYY HH:MM` pair.
pub fn parse_provider_timestamp(s: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }
    let (date_part, time_part) = s.split_once(' ')?;
    let (year, month, day) = extract_date(date_part)?;
    let (hour, minute) = extract_time(time_part)?;
    Local.with_ymd_and_hms(year, month, day, hour, minute, 0).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_extract_date() {
        assert_eq!(extract_date("21/11/2021"), Some((2021, 11, 21)));
        assert_eq!(extract_date("01-02-1999"), Some((1999, 2, 1)));
        assert_eq!(extract_date("31/12/2023"), Some((2023, 12, 31)));
        assert_eq!(extract_date("invalid"), None);
        assert_eq!(extract_date("32/01/2021"), None);
        assert_eq!(extract_date("21/13/2021"), None);
    }

    #[test]
    fn test_extract_time() {
        assert_eq!(extract_time("14:30"), Some((14, 30)));
        assert_eq!(extract_time("00:00"), Some((0, 0)));
        assert_eq!(extract_time("23:59"), Some((23, 59)));
        assert_eq!(extract_time("24:00"), None);
        assert_eq!(extract_time("bogus"), None);
    }

    #[test]
    fn test_combine_date_time() {
        let ts = combine_date_time("21/11/2021", "14:30");
        assert_eq!(ts.year(), 2021);
        assert_eq!(ts.month(), 11);
        assert_eq!(ts.day(), 21);
        assert_eq!(ts.hour(), 14);
        assert_eq!(ts.minute(), 30);
    }

    #[test]
    fn test_malformed_date_falls_back_to_now() {
        let ts = combine_date_time("invalid", "14:30");
        let delta = (Local::now() - ts).num_seconds().abs();
        assert!(delta < 5, "fallback should be within seconds of now");
    }

    #[test]
    fn test_malformed_time_falls_back_to_now() {
        let ts = combine_date_time("21/11/2021", "oops");
        let delta = (Local::now() - ts).num_seconds().abs();
        assert!(delta < 5);
    }

    #[test]
    fn test_parse_provider_timestamp_rfc3339() {
        let ts = parse_provider_timestamp("2021-11-21T14:30:00-03:00").unwrap();
        assert_eq!(ts.with_timezone(&chrono::FixedOffset::west_opt(3 * 3600).unwrap()).hour(), 14);
    }

    #[test]
    fn test_parse_provider_timestamp_date_hour_pair() {
        let ts = parse_provider_timestamp("21/11/2021 14:30").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2021, 11, 21));
        assert_eq!((ts.hour(), ts.minute()), (14, 30));
    }

    #[test]
    fn test_parse_provider_timestamp_garbage() {
        assert_eq!(parse_provider_timestamp("not a date"), None);
    }
}
