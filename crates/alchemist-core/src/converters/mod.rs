//! Built-in converter families
//!
//! Each family module exposes its transforms as plain functions taking the
//! value and the strict flag, plus a `load` function that registers the
//! family's converters. Composite converters (array and hash) delegate to the
//! scalar ones through [`Scalar`].
//!
//! # Module Organization
//!
//! - [`array`] - splitting strings into arrays and mapping arrays element-wise
//! - [`boolean`] - truthy/falsy strings and integer flags
//! - [`date_time`] - calendar parsing
//! - [`numeric`] - integer, float and generic numeric parsing
//! - [`range`] - numeric and character ranges
//! - [`hash`] - `key=value` / `key:value` pair strings
//!
//! Copyright (c) 2025 Alchemist Team
//! Licensed under the Apache-2.0 license

pub mod array;
pub mod boolean;
pub mod date_time;
pub mod hash;
pub mod numeric;
pub mod range;


use crate::tag::TypeTag;
use crate::value::Value;
use crate::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Scalar conversion applied to each element of a composite value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Integer,
    Float,
    Numeric,
    Boolean,
}

impl Scalar {
    /// Convert a single element from its string form
    pub fn convert(self, value: &Value, strict: bool) -> Result<Value> {
        match self {
            Scalar::Integer => numeric::string_to_integer(value, strict),
            Scalar::Float => numeric::string_to_float(value, strict),
            Scalar::Numeric => numeric::string_to_numeric(value, strict),
            Scalar::Boolean => boolean::string_to_boolean(value, strict),
        }
    }

    /// Tag of the scalar target
    pub fn target(self) -> TypeTag {
        match self {
            Scalar::Integer => TypeTag::INTEGER,
            Scalar::Float => TypeTag::FLOAT,
            Scalar::Numeric => TypeTag::NUMERIC,
            Scalar::Boolean => TypeTag::BOOLEAN,
        }
    }

    /// Canonical tag of an array of this scalar
    pub fn array_target(self) -> TypeTag {
        match self {
            Scalar::Integer => TypeTag::INTEGERS,
            Scalar::Float => TypeTag::FLOATS,
            Scalar::Numeric => TypeTag::NUMERICS,
            Scalar::Boolean => TypeTag::BOOLEANS,
        }
    }
}

/// Compile a built-in pattern once
fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("built-in pattern must compile"))
}

/// Strict-mode failure, or the lenient fallback value
fn reject(value: &Value, strict: bool, source: TypeTag, target: TypeTag) -> Result<Value> {
    if strict {
        Err(Error::conversion_type(value, &source, &target))
    } else {
        log::trace!("Lenient {}->{} returned input unchanged: {}", source, target, value);
        Ok(value.clone())
    }
}
