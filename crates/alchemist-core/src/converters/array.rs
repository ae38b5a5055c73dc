//! Array and set converters
//!
//! Strings are split on the first separator they contain; composite targets
//! such as `integers` then map every element through a [`Scalar`] converter
//! with the same strict flag.

use super::{reject, Scalar};
use crate::converter::{Converter, ConverterKind};
use crate::registry::ConverterRegistry;
use crate::tag::TypeTag;
use crate::value::{HashValue, Value, ValueSet, MAX_EXPANDED_RANGE};
use crate::Result;

/// Characters that may delimit array elements inside a string
const SEPARATORS: [char; 2] = [',', '-'];

/// Find the first separator that follows at least one other character
fn separator(text: &str) -> Option<char> {
    text.chars().skip(1).find(|c| SEPARATORS.contains(c))
}

/// Split on `separator`, dropping trailing empty fields
fn split(text: &str, separator: char) -> Vec<Value> {
    let mut fields: Vec<&str> = text.split(separator).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields.into_iter().map(Value::from).collect()
}

fn pairs(hash: &HashValue) -> Vec<Value> {
    hash.iter()
        .map(|(key, value)| Value::Array(vec![Value::String(key.clone()), value.clone()]))
        .collect()
}

/// Split a string into its elements
///
/// Whichever of `,` and `-` appears first delimits the whole string; elements
/// keep their surrounding whitespace. A string without a separator is wrapped
/// as a single element in lenient mode and rejected in strict mode.
///
/// # Examples
///
/// ```
/// use alchemist_core::converters::array::string_to_array;
/// use alchemist_core::Value;
///
/// let value = string_to_array(&"a-b,c".into(), true).unwrap();
/// assert_eq!(value, Value::from(vec!["a", "b,c"]));
/// ```
pub fn string_to_array(value: &Value, strict: bool) -> Result<Value> {
    let text = value.to_string();
    if text.is_empty() {
        return Ok(Value::Array(Vec::new()));
    }
    match separator(&text) {
        Some(sep) => Ok(Value::Array(split(&text, sep))),
        None if strict => reject(value, strict, TypeTag::STRING, TypeTag::ARRAY),
        None => Ok(Value::Array(vec![value.clone()])),
    }
}

/// Convert every element of an array through `scalar`
///
/// In strict mode the first failing element aborts the conversion with that
/// element's error. In lenient mode each element falls back on its own.
pub fn array_of(scalar: Scalar, value: &Value, strict: bool) -> Result<Value> {
    let Value::Array(elements) = value else {
        return reject(value, strict, TypeTag::ARRAY, scalar.array_target());
    };
    elements
        .iter()
        .map(|element| scalar.convert(element, strict))
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

/// Split a string, then convert every element through `scalar`
pub fn string_to_array_of(scalar: Scalar, value: &Value, strict: bool) -> Result<Value> {
    let array = string_to_array(value, strict)?;
    array_of(scalar, &array, strict)
}

/// Present any value as an array
///
/// `Nil` becomes the empty array, collections yield their elements, ranges
/// are expanded and anything else is wrapped as a single element. Float
/// ranges and ranges wider than [`MAX_EXPANDED_RANGE`] cannot be expanded.
pub fn object_to_array(value: &Value, strict: bool) -> Result<Value> {
    match value {
        Value::Nil => Ok(Value::Array(Vec::new())),
        Value::Array(_) => Ok(value.clone()),
        Value::Hash(hash) => Ok(Value::Array(pairs(hash))),
        Value::Set(set) => Ok(Value::Array(set.iter().cloned().collect())),
        Value::Range(range) => match range.to_values() {
            Some(values) => Ok(Value::Array(values)),
            None => reject(value, strict, TypeTag::OBJECT, TypeTag::ARRAY),
        },
        Value::Object(object) => match object.elements() {
            Some(elements) => Ok(Value::Array(elements.to_vec())),
            None => Ok(Value::Array(vec![value.clone()])),
        },
        _ => Ok(Value::Array(vec![value.clone()])),
    }
}

/// Flatten a hash into `[key, value]` pairs in insertion order
pub fn hash_to_array(value: &Value, strict: bool) -> Result<Value> {
    match value {
        Value::Hash(hash) => Ok(Value::Array(pairs(hash))),
        _ => reject(value, strict, TypeTag::HASH, TypeTag::ARRAY),
    }
}

/// Collect the elements of an array into a set
pub fn array_to_set(value: &Value, strict: bool) -> Result<Value> {
    match value {
        Value::Array(elements) => Ok(Value::Set(elements.iter().cloned().collect::<ValueSet>())),
        Value::Set(_) => Ok(value.clone()),
        _ => reject(value, strict, TypeTag::ARRAY, TypeTag::SET),
    }
}

/// Register the array family
pub fn load(registry: &mut ConverterRegistry) {
    registry.register(Converter::new(
        TypeTag::STRING,
        TypeTag::ARRAY,
        ConverterKind::StringToArray,
    ));

    let element_targets = [
        (TypeTag::NUMERIC, Scalar::Numeric),
        (TypeTag::NUMERICS, Scalar::Numeric),
        (TypeTag::NUMS, Scalar::Numeric),
        (TypeTag::INTEGERS, Scalar::Integer),
        (TypeTag::INTS, Scalar::Integer),
        (TypeTag::FLOATS, Scalar::Float),
        (TypeTag::BOOLEANS, Scalar::Boolean),
        (TypeTag::BOOLS, Scalar::Boolean),
    ];
    for (target, scalar) in element_targets.iter().cloned() {
        registry.register(Converter::new(TypeTag::ARRAY, target, ConverterKind::ArrayOf(scalar)));
    }

    // `numeric` stays a scalar target for strings
    for (target, scalar) in element_targets.into_iter().skip(1) {
        registry.register(Converter::new(
            TypeTag::STRING,
            target,
            ConverterKind::StringToArrayOf(scalar),
        ));
    }

    registry.register(Converter::new(
        TypeTag::OBJECT,
        TypeTag::ARRAY,
        ConverterKind::ObjectToArray,
    ));
    registry.register(Converter::new(TypeTag::HASH, TypeTag::ARRAY, ConverterKind::HashToArray));
    registry.register(Converter::new(TypeTag::ARRAY, TypeTag::SET, ConverterKind::ArrayToSet));
    registry.register(Converter::null(TypeTag::ARRAY));
    registry.register(Converter::null(TypeTag::SET));
}
