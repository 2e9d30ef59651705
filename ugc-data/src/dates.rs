//! Date utility functions.

use chrono::{NaiveDate, TimeDelta};

/// Month-first format stored on series points: "MM-DD-YYYY"
pub const US_FORMAT: &str = "%m-%d-%Y";

/// Format emitted by the date range picker inputs: "YYYY-MM-DD"
pub const PICKER_FORMAT: &str = "%Y-%m-%d";

/// Swap the first two dash-delimited segments of a date key.
///
/// "05-03-2021" becomes "03-05-2021". Returns `None` unless the key has
/// exactly three segments. The swap is its own inverse.
pub fn convert_date_to_us(raw: &str) -> Option<String> {
    let mut parts: Vec<&str> = raw.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    parts.swap(0, 1);
    Some(parts.join("-"))
}

/// Parse a date string in "MM-DD-YYYY" format
pub fn parse_us_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s.trim(), US_FORMAT)?)
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_picker_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s.trim(), PICKER_FORMAT)?)
}

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_picker_date(date: &NaiveDate) -> String {
    date.format(PICKER_FORMAT).to_string()
}

/// Milliseconds since the epoch for UTC midnight of `date`.
///
/// Matches what a browser returns for `new Date("YYYY-MM-DD").getTime()`.
pub fn to_timestamp_millis(date: &NaiveDate) -> i64 {
    date.and_time(chrono::NaiveTime::MIN)
        .and_utc()
        .timestamp_millis()
}

/// The day after `date`, saturating at the end of chrono's calendar.
pub fn next_day(date: &NaiveDate) -> NaiveDate {
    date.checked_add_signed(TimeDelta::days(1)).unwrap_or(*date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_date_to_us() {
        assert_eq!(convert_date_to_us("05-03-2021").as_deref(), Some("03-05-2021"));
        assert_eq!(convert_date_to_us("31-12-2020").as_deref(), Some("12-31-2020"));
    }

    #[test]
    fn test_convert_date_round_trip() {
        for raw in ["05-03-2021", "01-01-2021", "29-02-2024", "aa-bb-cccc"] {
            let once = convert_date_to_us(raw).unwrap();
            assert_eq!(convert_date_to_us(&once).unwrap(), raw);
        }
    }

    #[test]
    fn test_convert_date_rejects_wrong_shape() {
        assert_eq!(convert_date_to_us("2021/01/05"), None);
        assert_eq!(convert_date_to_us("01-2021"), None);
        assert_eq!(convert_date_to_us("01-01-01-2021"), None);
    }

    #[test]
    fn test_parse_dates() {
        let expected = NaiveDate::from_ymd_opt(2021, 3, 5).unwrap();
        assert_eq!(parse_us_date("03-05-2021").unwrap(), expected);
        assert_eq!(parse_picker_date("2021-03-05").unwrap(), expected);
        assert!(parse_us_date("13-05-2021").is_err());
        assert!(parse_picker_date("").is_err());
    }

    #[test]
    fn test_format_and_parse_picker() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        let formatted = format_picker_date(&date);
        assert_eq!(formatted, "2023-06-15");
        assert_eq!(parse_picker_date(&formatted).unwrap(), date);
    }

    #[test]
    fn test_to_timestamp_millis() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(to_timestamp_millis(&epoch), 0);
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert_eq!(to_timestamp_millis(&date), 1_609_459_200_000);
    }

    #[test]
    fn test_next_day_crosses_year() {
        let date = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        assert_eq!(next_day(&date), NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    }
}
