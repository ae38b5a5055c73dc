//! Boolean converters
//!
//! Copyright (c) 2025 Alchemist Team
//! Licensed under the Apache-2.0 license

use super::reject;
use crate::converter::{Converter, ConverterKind};
use crate::registry::ConverterRegistry;
use crate::tag::TypeTag;
use crate::value::Value;
use crate::Result;

/// Whole-token spellings of true, compared case-insensitively
pub const TRUTHY: &[&str] = &["1", "t", "true", "y", "yes", "on"];

/// Whole-token spellings of false, compared case-insensitively
pub const FALSY: &[&str] = &["0", "f", "false", "n", "no", "off"];

/// Classify a token as true, false or neither
pub fn parse_boolean(text: &str) -> Option<bool> {
    let token = text.to_lowercase();
    if TRUTHY.contains(&token.as_str()) {
        Some(true)
    } else if FALSY.contains(&token.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Convert a truthy or falsy string to a boolean
///
/// Unrecognised input, the empty string included, is returned unchanged in
/// lenient mode.
///
/// # Examples
///
/// ```
/// use alchemist_core::converters::boolean::string_to_boolean;
/// use alchemist_core::Value;
///
/// assert_eq!(string_to_boolean(&"Yes".into(), true).unwrap(), Value::Bool(true));
/// assert_eq!(string_to_boolean(&"maybe".into(), false).unwrap(), Value::from("maybe"));
/// ```
pub fn string_to_boolean(value: &Value, strict: bool) -> Result<Value> {
    match parse_boolean(&value.to_string()) {
        Some(b) => Ok(Value::Bool(b)),
        None => reject(value, strict, TypeTag::STRING, TypeTag::BOOLEAN),
    }
}

/// Zero is false, anything else is true
pub fn integer_to_boolean(value: &Value, strict: bool) -> Result<Value> {
    match value {
        Value::Integer(n) => Ok(Value::Bool(*n != 0)),
        Value::Float(n) => Ok(Value::Bool(*n != 0.0)),
        _ => reject(value, strict, TypeTag::INTEGER, TypeTag::BOOLEAN),
    }
}

/// True is 1, false is 0
pub fn boolean_to_integer(value: &Value, strict: bool) -> Result<Value> {
    match value {
        Value::Bool(b) => Ok(Value::Integer(i64::from(*b))),
        _ => reject(value, strict, TypeTag::BOOLEAN, TypeTag::INTEGER),
    }
}

/// Register the boolean family
pub fn load(registry: &mut ConverterRegistry) {
    registry.register(Converter::new(
        TypeTag::STRING,
        TypeTag::BOOLEAN,
        ConverterKind::StringToBoolean,
    ));
    registry.register(Converter::new(
        TypeTag::INTEGER,
        TypeTag::BOOLEAN,
        ConverterKind::IntegerToBoolean,
    ));
    registry.register(Converter::new(
        TypeTag::BOOLEAN,
        TypeTag::INTEGER,
        ConverterKind::BooleanToInteger,
    ));
    registry.register(Converter::null(TypeTag::BOOLEAN));
}
