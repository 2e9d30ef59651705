//! Parsing of the upstream day → count mapping.
//!
//! The source answers with a JSON object such as
//! `{"01-01-2021": 5, "02-01-2021": 7}` whose keys are day-first dates.
//! Keys are converted to month-first strings and accumulated in the order
//! the object lists them.

use crate::dates::{convert_date_to_us, parse_us_date};
use crate::error::LoadError;
use crate::models::DayCount;
use serde_json::Value;

/// Parse a response body into day counts, preserving source key order.
///
/// Any JSON number is taken as the count. Entries whose key is not a valid
/// "DD-MM-YYYY" date, or whose value is not a number, are skipped with a
/// warning. A body that is
/// not a JSON object is a [`LoadError::Parse`].
pub fn parse_growth_json(body: &str) -> Result<Vec<DayCount>, LoadError> {
    let json: Value = serde_json::from_str(body)?;
    let map = match json {
        Value::Object(map) => map,
        other => {
            return Err(LoadError::Parse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut growth_list = Vec::with_capacity(map.len());
    for (key, value) in &map {
        let Some(date) = convert_date_to_us(key) else {
            log::warn!("loader: skipping malformed date key {:?}", key);
            continue;
        };
        let day = match parse_us_date(&date) {
            Ok(day) => day,
            Err(e) => {
                log::warn!("loader: skipping invalid date {:?}: {}", key, e);
                continue;
            }
        };
        let Some(count) = value.as_f64() else {
            log::warn!("loader: skipping {:?}, count {} is not a number", key, value);
            continue;
        };
        growth_list.push(DayCount { date, count, day });
    }

    if !is_chronological(&growth_list) {
        log::warn!("loader: source keys are not in ascending date order");
    }
    log::debug!(
        "loader: parsed {} of {} entries",
        growth_list.len(),
        map.len()
    );
    Ok(growth_list)
}

/// True when every day is on or after the one before it.
pub fn is_chronological(days: &[DayCount]) -> bool {
    days.windows(2).all(|w| w[0].day <= w[1].day)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_preserves_order_and_converts() {
        let days = parse_growth_json(r#"{"01-01-2021": 5, "02-01-2021": 7}"#).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "01-01-2021");
        assert_eq!(days[0].count, 5.0);
        assert_eq!(days[1].date, "01-02-2021");
        assert_eq!(days[1].count, 7.0);
        assert_eq!(days[1].day, NaiveDate::from_ymd_opt(2021, 1, 2).unwrap());
    }

    #[test]
    fn test_parse_keeps_unsorted_source_order() {
        let body = r#"{"03-01-2021": 1, "01-01-2021": 2, "02-01-2021": 3}"#;
        let days = parse_growth_json(body).unwrap();
        let counts: Vec<f64> = days.iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![1.0, 2.0, 3.0]);
        assert!(!is_chronological(&days));
    }

    #[test]
    fn test_parse_empty_object() {
        let days = parse_growth_json("{}").unwrap();
        assert!(days.is_empty());
        assert!(is_chronological(&days));
    }

    #[test]
    fn test_parse_skips_bad_entries() {
        let body = r#"{"01-01-2021": 5, "garbage": 1, "32-01-2021": 2, "02-01-2021": "x", "03-01-2021": null, "04-01-2021": 9}"#;
        let days = parse_growth_json(body).unwrap();
        let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["01-01-2021", "01-04-2021"]);
    }

    #[test]
    fn test_parse_keeps_every_numeric_count() {
        let body = r#"{"01-01-2021": 5.0, "02-01-2021": 1e3, "03-01-2021": 7, "04-01-2021": -2}"#;
        let days = parse_growth_json(body).unwrap();
        assert_eq!(days.len(), 4);
        let counts: Vec<f64> = days.iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![5.0, 1000.0, 7.0, -2.0]);
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(matches!(parse_growth_json("[1, 2]"), Err(LoadError::Parse(_))));
        assert!(matches!(parse_growth_json("<html>"), Err(LoadError::Parse(_))));
    }
}
