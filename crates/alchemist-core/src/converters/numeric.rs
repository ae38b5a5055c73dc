//! Integer, float and generic numeric converters
//!
//! Strict parsing requires the whole (trimmed) input to be a literal.
//! Lenient parsing takes the longest valid leading literal and defaults to
//! zero when there is none.
//!
//! Copyright (c) 2025 Alchemist Team
//! Licensed under the Apache-2.0 license

use super::{pattern, reject};
use crate::converter::{Converter, ConverterKind};
use crate::registry::ConverterRegistry;
use crate::tag::TypeTag;
use crate::value::Value;
use crate::Result;
use regex::Regex;
use std::sync::OnceLock;

static STRICT_INTEGER: OnceLock<Regex> = OnceLock::new();
static LEADING_INTEGER: OnceLock<Regex> = OnceLock::new();
static STRICT_FLOAT: OnceLock<Regex> = OnceLock::new();
static LEADING_FLOAT: OnceLock<Regex> = OnceLock::new();
static INTEGER_MATCHER: OnceLock<Regex> = OnceLock::new();
static FLOAT_MATCHER: OnceLock<Regex> = OnceLock::new();

fn strict_integer() -> &'static Regex {
    pattern(&STRICT_INTEGER, r"^\s*[-+]?[0-9]+(?:_[0-9]+)*\s*$")
}

fn leading_integer() -> &'static Regex {
    pattern(&LEADING_INTEGER, r"^\s*([-+]?[0-9]+(?:_[0-9]+)*)")
}

fn strict_float() -> &'static Regex {
    pattern(
        &STRICT_FLOAT,
        r"^\s*[-+]?(?:[0-9]+(?:_[0-9]+)*(?:\.[0-9]+(?:_[0-9]+)*)?|\.[0-9]+(?:_[0-9]+)*)(?:[eE][-+]?[0-9]+(?:_[0-9]+)*)?\s*$",
    )
}

fn leading_float() -> &'static Regex {
    pattern(
        &LEADING_FLOAT,
        r"^\s*([-+]?(?:[0-9]+(?:_[0-9]+)*(?:\.[0-9]+(?:_[0-9]+)*)?|\.[0-9]+(?:_[0-9]+)*)(?:[eE][-+]?[0-9]+(?:_[0-9]+)*)?)",
    )
}

// Classification grammars for string->numeric. They tolerate whitespace
// between digit groups; the chosen converter then decides what to make of it.
fn integer_matcher() -> &'static Regex {
    pattern(&INTEGER_MATCHER, r"^\s*[-+]?\s*([0-9][0-9\s]*)?$")
}

fn float_matcher() -> &'static Regex {
    pattern(
        &FLOAT_MATCHER,
        r"^\s*[-+]?([0-9\s]*)(\.[0-9\s]+)?([eE]?[-+]?[0-9\s]+)?$",
    )
}

fn literal(text: &str) -> String {
    text.chars().filter(|c| *c != '_' && !c.is_whitespace()).collect()
}

/// Parse a complete integer literal
///
/// Returns `None` for anything but an optionally signed decimal literal, and
/// for literals that overflow `i64`.
pub fn parse_integer(text: &str) -> Option<i64> {
    if !strict_integer().is_match(text) {
        return None;
    }
    literal(text).parse().ok()
}

/// Parse the longest leading integer literal, saturating on overflow
pub fn parse_integer_prefix(text: &str) -> i64 {
    let Some(captures) = leading_integer().captures(text) else {
        return 0;
    };
    let digits = literal(&captures[1]);
    digits.parse().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Parse a complete float literal
pub fn parse_float(text: &str) -> Option<f64> {
    if !strict_float().is_match(text) {
        return None;
    }
    literal(text).parse().ok()
}

/// Parse the longest leading float literal
pub fn parse_float_prefix(text: &str) -> f64 {
    leading_float()
        .captures(text)
        .and_then(|captures| literal(&captures[1]).parse().ok())
        .unwrap_or(0.0)
}

/// Convert a string to an integer
///
/// # Examples
///
/// ```
/// use alchemist_core::converters::numeric::string_to_integer;
/// use alchemist_core::Value;
///
/// assert_eq!(string_to_integer(&"1abc".into(), false).unwrap(), Value::Integer(1));
/// assert!(string_to_integer(&"1abc".into(), true).is_err());
/// ```
pub fn string_to_integer(value: &Value, strict: bool) -> Result<Value> {
    match value {
        Value::Integer(_) => return Ok(value.clone()),
        Value::Float(n) => {
            if strict {
                return reject(value, strict, TypeTag::STRING, TypeTag::INTEGER);
            }
            return Ok(Value::Integer(n.trunc() as i64));
        }
        _ => {}
    }

    let text = value.to_string();
    match parse_integer(&text) {
        Some(n) => Ok(Value::Integer(n)),
        None if strict => reject(value, strict, TypeTag::STRING, TypeTag::INTEGER),
        None => Ok(Value::Integer(parse_integer_prefix(&text))),
    }
}

/// Convert a string to a float
///
/// # Examples
///
/// ```
/// use alchemist_core::converters::numeric::string_to_float;
/// use alchemist_core::Value;
///
/// assert_eq!(string_to_float(&"1.2a".into(), false).unwrap(), Value::Float(1.2));
/// assert_eq!(string_to_float(&"-.1e-1".into(), true).unwrap(), Value::Float(-0.01));
/// ```
pub fn string_to_float(value: &Value, strict: bool) -> Result<Value> {
    match value {
        Value::Float(_) => return Ok(value.clone()),
        Value::Integer(n) => return Ok(Value::Float(*n as f64)),
        _ => {}
    }

    let text = value.to_string();
    match parse_float(&text) {
        Some(n) => Ok(Value::Float(n)),
        None if strict => reject(value, strict, TypeTag::STRING, TypeTag::FLOAT),
        None => Ok(Value::Float(parse_float_prefix(&text))),
    }
}

/// Convert a string to an integer or a float, whichever grammar it matches
///
/// The integer grammar is tried first. Input matching neither grammar is
/// returned unchanged in lenient mode.
pub fn string_to_numeric(value: &Value, strict: bool) -> Result<Value> {
    let text = match value {
        Value::Integer(_) | Value::Float(_) => return Ok(value.clone()),
        Value::String(s) | Value::Symbol(s) => s.as_str(),
        _ => return reject(value, strict, TypeTag::STRING, TypeTag::NUMERIC),
    };

    if integer_matcher().is_match(text) {
        string_to_integer(value, strict)
    } else if float_matcher().is_match(text) {
        string_to_float(value, strict)
    } else {
        reject(value, strict, TypeTag::STRING, TypeTag::NUMERIC)
    }
}

/// Render any value in its textual form
pub fn integer_to_string(value: &Value, _strict: bool) -> Result<Value> {
    Ok(Value::String(value.to_string()))
}

/// Register the numeric family
pub fn load(registry: &mut ConverterRegistry) {
    registry.register(Converter::new(
        TypeTag::STRING,
        TypeTag::INTEGER,
        ConverterKind::StringToInteger,
    ));
    registry.register(Converter::new(
        TypeTag::INTEGER,
        TypeTag::STRING,
        ConverterKind::IntegerToString,
    ));
    registry.register(Converter::null(TypeTag::INTEGER));
    registry.register(Converter::new(
        TypeTag::STRING,
        TypeTag::FLOAT,
        ConverterKind::StringToFloat,
    ));
    registry.register(Converter::null(TypeTag::FLOAT));
    registry.register(Converter::new(
        TypeTag::STRING,
        TypeTag::NUMERIC,
        ConverterKind::StringToNumeric,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integer(input: &str) -> Value {
        string_to_integer(&Value::from(input), false).unwrap()
    }

    fn float(input: &str) -> Value {
        string_to_float(&Value::from(input), false).unwrap()
    }

    fn numeric(input: &str) -> Value {
        string_to_numeric(&Value::from(input), false).unwrap()
    }

    #[test]
    fn test_string_to_integer_lenient() {
        let cases = [
            ("", 0),
            ("1", 1),
            ("1ab", 1),
            ("+1", 1),
            ("-1", -1),
            ("1e+1", 1),
            ("+1e-1", 1),
            ("-1e1", -1),
            ("1.0", 1),
            ("-1.0e-1", -1),
            (".1", 0),
            ("-.1e+1", 0),
            (" 1 00", 1),
            ("  1  ", 1),
            ("  -1 ", -1),
            ("1_000", 1000),
        ];
        for (input, expected) in cases {
            assert_eq!(integer(input), Value::Integer(expected), "input {:?}", input);
        }
    }

    #[test]
    fn test_string_to_integer_strict() {
        for input in ["", "1.2", "1abc", " 1 00", "- 1", "1__0"] {
            let err = string_to_integer(&Value::from(input), true).unwrap_err();
            assert!(err.is_conversion_type(), "input {:?}", input);
        }
        assert_eq!(
            string_to_integer(&Value::from("  -12 "), true).unwrap(),
            Value::Integer(-12)
        );
    }

    #[test]
    fn test_string_to_integer_overflow() {
        let huge = "99999999999999999999";
        assert!(string_to_integer(&Value::from(huge), true).is_err());
        assert_eq!(integer(huge), Value::Integer(i64::MAX));
        assert_eq!(integer("-99999999999999999999"), Value::Integer(i64::MIN));
    }

    #[test]
    fn test_string_to_integer_non_string_input() {
        assert_eq!(string_to_integer(&Value::Integer(5), true).unwrap(), Value::Integer(5));
        assert_eq!(string_to_integer(&Value::Float(1.2), false).unwrap(), Value::Integer(1));
        assert!(string_to_integer(&Value::Float(1.2), true).is_err());
    }

    #[test]
    fn test_string_to_float_lenient() {
        let cases = [
            ("", 0.0),
            ("1", 1.0),
            ("+1", 1.0),
            ("1.2a", 1.2),
            ("-1", -1.0),
            ("1e1", 10.0),
            ("1e-1", 0.1),
            ("-1e1", -10.0),
            ("-1e-1", -0.1),
            ("1.0e+1", 10.0),
            ("-1.0e-1", -0.1),
            (".1", 0.1),
            (".1e+1", 1.0),
            (".1e-1", 0.01),
            ("-.1e+1", -1.0),
            ("-.1e-1", -0.01),
            (" 1. 10 ", 1.0),
            ("    1.0", 1.0),
            (" .1    ", 0.1),
            ("  -1.1 ", -1.1),
            (" -1 . 1", -1.0),
        ];
        for (input, expected) in cases {
            assert_eq!(float(input), Value::Float(expected), "input {:?}", input);
        }
    }

    #[test]
    fn test_string_to_float_strict() {
        let err = string_to_float(&Value::from("1.2a"), true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'1.2a' could not be converted from `string` into `float`"
        );
        assert!(string_to_float(&Value::from(""), true).is_err());
        assert!(string_to_float(&Value::from("1."), true).is_err());
        assert_eq!(
            string_to_float(&Value::from(" 1.5e3 "), true).unwrap(),
            Value::Float(1500.0)
        );
    }

    #[test]
    fn test_string_to_numeric() {
        let ints = [("", 0), ("1", 1), ("+1", 1), ("-1", -1), (" 1 00", 1), ("  -1 ", -1)];
        for (input, expected) in ints {
            assert_eq!(numeric(input), Value::Integer(expected), "input {:?}", input);
        }

        let floats = [
            ("1e1", 10.0),
            ("-1e-1", -0.1),
            ("1.0", 1.0),
            ("1.0e+1", 10.0),
            (".1", 0.1),
            ("-.1e-1", -0.01),
            (" 1. 10 ", 1.0),
            ("  -1.1 ", -1.1),
            (" -1 . 1", -1.0),
        ];
        for (input, expected) in floats {
            assert_eq!(numeric(input), Value::Float(expected), "input {:?}", input);
        }
    }

    #[test]
    fn test_string_to_numeric_unmatched() {
        assert_eq!(numeric("false"), Value::from("false"));
        assert_eq!(
            string_to_numeric(&Value::Bool(false), false).unwrap(),
            Value::Bool(false)
        );
        assert!(string_to_numeric(&Value::from("abc"), true).is_err());
        assert!(string_to_numeric(&Value::Bool(false), true).is_err());
    }

    #[test]
    fn test_integer_to_string() {
        assert_eq!(integer_to_string(&Value::Integer(1), false).unwrap(), Value::from("1"));
        assert_eq!(integer_to_string(&Value::Integer(-30), true).unwrap(), Value::from("-30"));
    }
}
