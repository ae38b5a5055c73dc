//! Date, datetime and time converters
//!
//! Parsing is a fixed list of calendar formats tried in order. Ordinal day
//! suffixes (`7th`) and commas are normalised away before matching.

use super::{pattern, reject};
use crate::converter::{Converter, ConverterKind};
use crate::registry::ConverterRegistry;
use crate::tag::TypeTag;
use crate::value::Value;
use crate::Result;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

static ORDINAL: OnceLock<Regex> = OnceLock::new();

/// Accepted date layouts, most specific first
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d %B %Y",
    "%B %d %Y",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

fn normalize(text: &str) -> String {
    let ordinal = pattern(&ORDINAL, r"(?i)\b([0-9]{1,2})(?:st|nd|rd|th)\b");
    let text = ordinal.replace_all(text.trim(), "$1");
    text.replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a calendar date
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = normalize(text);
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&text, format).ok())
}

/// Parse a date with an optional time of day (midnight when absent)
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text.trim()) {
        return Some(dt.naive_utc());
    }
    let text = normalize(text);
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&text, format) {
            return Some(dt);
        }
    }
    for date_format in DATE_FORMATS {
        for time_format in TIME_FORMATS {
            let format = format!("{} {}", date_format, time_format);
            if let Ok(dt) = NaiveDateTime::parse_from_str(&text, &format) {
                return Some(dt);
            }
        }
    }
    parse_date(&text).and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Parse a point in time; a bare time of day is anchored to today's date
pub fn parse_time(text: &str) -> Option<NaiveDateTime> {
    if let Some(dt) = parse_datetime(text) {
        return Some(dt);
    }
    let text = normalize(text);
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&text, format).ok())
        .map(|time| Local::now().date_naive().and_time(time))
}

/// Convert a string to a date
pub fn string_to_date(value: &Value, strict: bool) -> Result<Value> {
    match value.as_str().and_then(parse_date) {
        Some(date) => Ok(Value::Date(date)),
        None => reject(value, strict, TypeTag::STRING, TypeTag::DATE),
    }
}

/// Convert a string to a datetime
pub fn string_to_datetime(value: &Value, strict: bool) -> Result<Value> {
    match value.as_str().and_then(parse_datetime) {
        Some(dt) => Ok(Value::DateTime(dt)),
        None => reject(value, strict, TypeTag::STRING, TypeTag::DATETIME),
    }
}

/// Convert a string to a time
pub fn string_to_time(value: &Value, strict: bool) -> Result<Value> {
    match value.as_str().and_then(parse_time) {
        Some(time) => Ok(Value::Time(time)),
        None => reject(value, strict, TypeTag::STRING, TypeTag::TIME),
    }
}

/// Register the date and time family
pub fn load(registry: &mut ConverterRegistry) {
    registry.register(Converter::new(TypeTag::STRING, TypeTag::DATE, ConverterKind::StringToDate));
    registry.register(Converter::null(TypeTag::DATE));
    registry.register(Converter::new(
        TypeTag::STRING,
        TypeTag::DATETIME,
        ConverterKind::StringToDateTime,
    ));
    registry.register(Converter::null(TypeTag::DATETIME));
    registry.register(Converter::new(TypeTag::STRING, TypeTag::TIME, ConverterKind::StringToTime));
    registry.register(Converter::null(TypeTag::TIME));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, s).unwrap()
    }

    #[test]
    fn test_string_to_date() {
        let cases = [
            ("1-1-2015", date(2015, 1, 1)),
            ("2014/12/07", date(2014, 12, 7)),
            ("2014-12-07", date(2014, 12, 7)),
            ("7th December 2014", date(2014, 12, 7)),
            ("December 7, 2014", date(2014, 12, 7)),
        ];
        for (input, expected) in cases {
            assert_eq!(
                string_to_date(&Value::from(input), true).unwrap(),
                Value::Date(expected),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_string_to_date_failures() {
        assert_eq!(string_to_date(&Value::from(""), false).unwrap(), Value::from(""));
        let err = string_to_date(&Value::from("2014 - 12 - 07"), true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'2014 - 12 - 07' could not be converted from `string` into `date`"
        );
    }

    #[test]
    fn test_string_to_datetime() {
        let cases = [
            ("2014/12/07", datetime(2014, 12, 7, 0, 0, 0)),
            ("2014-12-07", datetime(2014, 12, 7, 0, 0, 0)),
            ("7th December 2014", datetime(2014, 12, 7, 0, 0, 0)),
            ("7th December 2014 17:19:44", datetime(2014, 12, 7, 17, 19, 44)),
            ("2014-12-07T17:19:44", datetime(2014, 12, 7, 17, 19, 44)),
            ("2014-12-07T17:19:44+01:00", datetime(2014, 12, 7, 16, 19, 44)),
        ];
        for (input, expected) in cases {
            assert_eq!(
                string_to_datetime(&Value::from(input), true).unwrap(),
                Value::DateTime(expected),
                "input {:?}",
                input
            );
        }
        assert_eq!(string_to_datetime(&Value::from(""), false).unwrap(), Value::from(""));
        assert!(string_to_datetime(&Value::from("2014 - 12 - 07"), true).is_err());
    }

    #[test]
    fn test_string_to_time() {
        assert_eq!(
            string_to_time(&Value::from("01/01/2015"), true).unwrap(),
            Value::Time(datetime(2015, 1, 1, 0, 0, 0))
        );
        assert_eq!(
            string_to_time(&Value::from("01/01/2015 08:35"), true).unwrap(),
            Value::Time(datetime(2015, 1, 1, 8, 35, 0))
        );

        let Value::Time(clock) = string_to_time(&Value::from("12:35"), true).unwrap() else {
            panic!("expected a time value");
        };
        assert_eq!((clock.hour(), clock.minute()), (12, 35));

        assert_eq!(string_to_time(&Value::from(""), false).unwrap(), Value::from(""));
        assert!(string_to_time(&Value::from("11-13-2015"), true).is_err());
    }

    #[test]
    fn test_non_string_input() {
        assert_eq!(string_to_date(&Value::Integer(3), false).unwrap(), Value::Integer(3));
        assert!(string_to_date(&Value::Integer(3), true).is_err());
    }
}
