//! Range converter
//!
//! Three grammars are tried in order: a single number, two numbers joined by
//! a separator, and two single characters joined by a separator. Separators
//! are `..`, `...`, `-` and `,`; the dots may be spaced out. The range
//! excludes its upper bound only when the separator is `...`.
//!
//! Copyright (c) 2025 Alchemist Team
//! Licensed under the Apache-2.0 license

use super::numeric::{parse_float, parse_integer};
use super::{pattern, reject};
use crate::converter::{Converter, ConverterKind};
use crate::registry::ConverterRegistry;
use crate::tag::TypeTag;
use crate::value::{Endpoint, Range, Value};
use crate::Result;
use regex::{Captures, Regex};
use std::sync::OnceLock;

static SINGLE_NUMBER: OnceLock<Regex> = OnceLock::new();
static NUMBER_PAIR: OnceLock<Regex> = OnceLock::new();
static LETTER_PAIR: OnceLock<Regex> = OnceLock::new();

fn single_number() -> &'static Regex {
    pattern(&SINGLE_NUMBER, r"^(?P<digit>-?[0-9]+(?:\.[0-9]+)?)$")
}

fn number_pair() -> &'static Regex {
    pattern(
        &NUMBER_PAIR,
        r"^(?P<open>-?[0-9]+(?:\.[0-9]+)?)\s*(?P<sep>(?:\.\s*){2,3}|-|,)\s*(?P<close>-?[0-9]+(?:\.[0-9]+)?)$",
    )
}

fn letter_pair() -> &'static Regex {
    pattern(
        &LETTER_PAIR,
        r"^(?P<open>[A-Za-z0-9_])\s*(?P<sep>(?:\.\s*){2,3}|-|,)\s*(?P<close>[A-Za-z0-9_])$",
    )
}

/// Parse a numeric endpoint, integer grammar first
fn number(text: &str) -> Option<Endpoint> {
    parse_integer(text)
        .map(Endpoint::Integer)
        .or_else(|| parse_float(text).map(Endpoint::Float))
}

fn letter(text: &str) -> Option<Endpoint> {
    text.chars().next().map(Endpoint::Char)
}

fn is_exclusive(separator: &str) -> bool {
    separator.chars().filter(|c| !c.is_whitespace()).eq("...".chars())
}

fn pair(captures: &Captures<'_>, endpoint: fn(&str) -> Option<Endpoint>) -> Option<Range> {
    let start = endpoint(&captures["open"])?;
    let end = endpoint(&captures["close"])?;
    Some(Range {
        start,
        end,
        exclusive: is_exclusive(&captures["sep"]),
    })
}

/// Parse range notation such as `1..10`, `1...10`, `1-10`, `a-z` or `5`
pub fn parse_range(text: &str) -> Option<Range> {
    if let Some(captures) = single_number().captures(text) {
        let point = number(&captures["digit"])?;
        return Some(Range::inclusive(point, point));
    }
    if let Some(captures) = number_pair().captures(text) {
        return pair(&captures, number);
    }
    if let Some(captures) = letter_pair().captures(text) {
        return pair(&captures, letter);
    }
    None
}

/// Convert a string to a range
///
/// # Examples
///
/// ```
/// use alchemist_core::converters::range::string_to_range;
/// use alchemist_core::{Endpoint, Range, Value};
///
/// let range = string_to_range(&"1...10".into(), true).unwrap();
/// assert_eq!(range, Value::Range(Range::exclusive(Endpoint::Integer(1), Endpoint::Integer(10))));
/// ```
pub fn string_to_range(value: &Value, strict: bool) -> Result<Value> {
    match parse_range(&value.to_string()) {
        Some(range) => Ok(Value::Range(range)),
        None => reject(value, strict, TypeTag::STRING, TypeTag::RANGE),
    }
}

/// Register the range family
pub fn load(registry: &mut ConverterRegistry) {
    registry.register(Converter::new(
        TypeTag::STRING,
        TypeTag::RANGE,
        ConverterKind::StringToRange,
    ));
    registry.register(Converter::null(TypeTag::RANGE));
}
