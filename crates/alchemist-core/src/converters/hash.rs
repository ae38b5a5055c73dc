//! Hash converters
//!
//! Copyright (c) 2025 Alchemist Team
//! Licensed under the Apache-2.0 license

use super::{pattern, reject, Scalar};
use crate::converter::{Converter, ConverterKind};
use crate::registry::ConverterRegistry;
use crate::tag::TypeTag;
use crate::value::{HashValue, Value};
use crate::Result;
use regex::Regex;
use std::sync::OnceLock;

static PAIR_SEPARATOR: OnceLock<Regex> = OnceLock::new();

fn pair_separator() -> &'static Regex {
    pattern(&PAIR_SEPARATOR, r"\s*[& ]\s*")
}

/// Store `value` under `key`, promoting repeated keys to an array
fn accumulate(pairs: &mut HashValue, key: &str, value: Value) {
    match pairs.get_mut(key) {
        Some(Value::Array(values)) => values.push(value),
        Some(Value::Nil) | None => {
            pairs.insert(key.to_string(), value);
        }
        Some(current) => {
            let first = std::mem::replace(current, Value::Nil);
            *current = Value::Array(vec![first, value]);
        }
    }
}

/// Parse `key=value` or `key:value` pairs into a hash
///
/// Pairs are separated by `&` or whitespace. A pair without a value maps its
/// key to `Nil`. When `scalar` is given every value is converted through it
/// with the same strict flag.
///
/// # Examples
///
/// ```
/// use alchemist_core::converters::hash::string_to_hash;
/// use alchemist_core::converters::Scalar;
/// use alchemist_core::Value;
///
/// let hash = string_to_hash(Some(Scalar::Integer), &"a=1 & b=2".into(), true).unwrap();
/// assert_eq!(hash.to_string(), "{a: 1, b: 2}");
/// ```
pub fn string_to_hash(scalar: Option<Scalar>, value: &Value, strict: bool) -> Result<Value> {
    let Some(text) = value.as_str() else {
        let target = scalar.map_or(TypeTag::HASH, |s| s.target());
        return reject(value, strict, TypeTag::STRING, target);
    };

    let mut pairs = HashValue::new();
    for pair in pair_separator().split(text).filter(|pair| !pair.is_empty()) {
        let mut parts = pair.splitn(2, ['=', ':']);
        let key = parts.next().unwrap_or_default();
        let raw = parts.next().map_or(Value::Nil, Value::from);
        let converted = match scalar {
            Some(scalar) => scalar.convert(&raw, strict)?,
            None => raw,
        };
        accumulate(&mut pairs, key, converted);
    }
    Ok(Value::Hash(pairs))
}

/// Register the hash family
pub fn load(registry: &mut ConverterRegistry) {
    registry.register(Converter::null(TypeTag::HASH));
    registry.register(Converter::new(
        TypeTag::STRING,
        TypeTag::HASH,
        ConverterKind::StringToHash(None),
    ));

    let typed = [
        (TypeTag::INT_HASH, Scalar::Integer),
        (TypeTag::INTEGER_HASH, Scalar::Integer),
        (TypeTag::FLOAT_HASH, Scalar::Float),
        (TypeTag::NUMERIC_HASH, Scalar::Numeric),
        (TypeTag::NUM_HASH, Scalar::Numeric),
        (TypeTag::BOOL_HASH, Scalar::Boolean),
        (TypeTag::BOOLEAN_HASH, Scalar::Boolean),
    ];
    for (target, scalar) in typed {
        registry.register(Converter::new(
            TypeTag::STRING,
            target,
            ConverterKind::StringToHash(Some(scalar)),
        ));
    }
}
