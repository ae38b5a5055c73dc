//! Converters: named transforms between two type tags
//!
//! The set of built-in transforms is closed ([`ConverterKind`]); hosts extend
//! the registry with [`ConverterKind::Custom`] entries carrying a plain
//! function.
//!
//! Copyright (c) 2025 Alchemist Team
//! Licensed under the Apache-2.0 license

use crate::converters::{array, boolean, date_time, hash, numeric, range, Scalar};
use crate::registry::ConversionKey;
use crate::tag::TypeTag;
use crate::value::Value;
use crate::Result;

/// A function that converts a value, honouring the strict flag
pub type ConverterFunction = fn(&Value, bool) -> Result<Value>;

/// The transform a converter applies
#[derive(Debug, Clone)]
pub enum ConverterKind {
    /// Identity, used for `T -> T` conversions
    Null,

    // Array family
    StringToArray,
    /// Map every element of an array through a scalar converter
    ArrayOf(Scalar),
    /// Split a string into an array, then map every element
    StringToArrayOf(Scalar),
    ObjectToArray,
    HashToArray,
    ArrayToSet,

    // Boolean family
    StringToBoolean,
    IntegerToBoolean,
    BooleanToInteger,

    // Date and time family
    StringToDate,
    StringToDateTime,
    StringToTime,

    // Numeric family
    StringToInteger,
    IntegerToString,
    StringToFloat,
    StringToNumeric,

    // Range family
    StringToRange,

    // Hash family
    /// Split a string into key/value pairs, optionally converting each value
    StringToHash(Option<Scalar>),

    /// Host-provided transform
    Custom {
        name: String,
        func: ConverterFunction,
    },
}

/// A transform registered under a `(source, target)` pair
#[derive(Debug, Clone)]
pub struct Converter {
    source: TypeTag,
    target: TypeTag,
    kind: ConverterKind,
}

impl Converter {
    /// Create a converter for the given endpoints
    pub fn new(
        source: impl Into<TypeTag>,
        target: impl Into<TypeTag>,
        kind: ConverterKind,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }

    /// Identity converter for `tag -> tag`
    pub fn null(tag: impl Into<TypeTag>) -> Self {
        let tag = tag.into();
        Self::new(tag.clone(), tag, ConverterKind::Null)
    }

    /// Converter backed by a host function
    pub fn custom(
        source: impl Into<TypeTag>,
        target: impl Into<TypeTag>,
        name: impl Into<String>,
        func: ConverterFunction,
    ) -> Self {
        Self::new(
            source,
            target,
            ConverterKind::Custom {
                name: name.into(),
                func,
            },
        )
    }

    pub fn source(&self) -> &TypeTag {
        &self.source
    }

    pub fn target(&self) -> &TypeTag {
        &self.target
    }

    pub fn kind(&self) -> &ConverterKind {
        &self.kind
    }

    /// Registry key this converter is stored under
    pub fn key(&self) -> ConversionKey {
        ConversionKey::new(self.source.clone(), self.target.clone())
    }

    /// Run the converter
    ///
    /// In strict mode input that fails the converter's grammar yields
    /// [`Error::ConversionType`](crate::Error::ConversionType); in lenient
    /// mode the converter returns its best effort instead.
    pub fn call(&self, value: &Value, strict: bool) -> Result<Value> {
        match &self.kind {
            ConverterKind::Null => Ok(value.clone()),
            ConverterKind::StringToArray => array::string_to_array(value, strict),
            ConverterKind::ArrayOf(scalar) => array::array_of(*scalar, value, strict),
            ConverterKind::StringToArrayOf(scalar) => {
                array::string_to_array_of(*scalar, value, strict)
            }
            ConverterKind::ObjectToArray => array::object_to_array(value, strict),
            ConverterKind::HashToArray => array::hash_to_array(value, strict),
            ConverterKind::ArrayToSet => array::array_to_set(value, strict),
            ConverterKind::StringToBoolean => boolean::string_to_boolean(value, strict),
            ConverterKind::IntegerToBoolean => boolean::integer_to_boolean(value, strict),
            ConverterKind::BooleanToInteger => boolean::boolean_to_integer(value, strict),
            ConverterKind::StringToDate => date_time::string_to_date(value, strict),
            ConverterKind::StringToDateTime => date_time::string_to_datetime(value, strict),
            ConverterKind::StringToTime => date_time::string_to_time(value, strict),
            ConverterKind::StringToInteger => numeric::string_to_integer(value, strict),
            ConverterKind::IntegerToString => numeric::integer_to_string(value, strict),
            ConverterKind::StringToFloat => numeric::string_to_float(value, strict),
            ConverterKind::StringToNumeric => numeric::string_to_numeric(value, strict),
            ConverterKind::StringToRange => range::string_to_range(value, strict),
            ConverterKind::StringToHash(scalar) => hash::string_to_hash(*scalar, value, strict),
            ConverterKind::Custom { func, .. } => func(value, strict),
        }
    }
}
