//! Type tags naming conversion endpoints
//!
//! A [`TypeTag`] is an opaque identifier compared by equality. There is no
//! subtyping between tags: `integers` is its own registry key, not "an array
//! of `integer`".

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Identifier of a conversion endpoint such as `string` or `integer`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTag(Cow<'static, str>);

impl TypeTag {
    pub const STRING: TypeTag = TypeTag::from_static("string");
    pub const SYMBOL: TypeTag = TypeTag::from_static("symbol");
    pub const INTEGER: TypeTag = TypeTag::from_static("integer");
    pub const FLOAT: TypeTag = TypeTag::from_static("float");
    pub const NUMERIC: TypeTag = TypeTag::from_static("numeric");
    pub const BOOLEAN: TypeTag = TypeTag::from_static("boolean");
    pub const DATE: TypeTag = TypeTag::from_static("date");
    pub const DATETIME: TypeTag = TypeTag::from_static("datetime");
    pub const TIME: TypeTag = TypeTag::from_static("time");
    pub const RANGE: TypeTag = TypeTag::from_static("range");
    pub const ARRAY: TypeTag = TypeTag::from_static("array");
    pub const HASH: TypeTag = TypeTag::from_static("hash");
    pub const SET: TypeTag = TypeTag::from_static("set");
    /// Wildcard source consulted when an exact lookup misses
    pub const OBJECT: TypeTag = TypeTag::from_static("object");
    pub const NIL: TypeTag = TypeTag::from_static("nilclass");

    // Composite targets
    pub const INTEGERS: TypeTag = TypeTag::from_static("integers");
    pub const INTS: TypeTag = TypeTag::from_static("ints");
    pub const FLOATS: TypeTag = TypeTag::from_static("floats");
    pub const NUMERICS: TypeTag = TypeTag::from_static("numerics");
    pub const NUMS: TypeTag = TypeTag::from_static("nums");
    pub const BOOLEANS: TypeTag = TypeTag::from_static("booleans");
    pub const BOOLS: TypeTag = TypeTag::from_static("bools");
    pub const INT_HASH: TypeTag = TypeTag::from_static("int_hash");
    pub const INTEGER_HASH: TypeTag = TypeTag::from_static("integer_hash");
    pub const FLOAT_HASH: TypeTag = TypeTag::from_static("float_hash");
    pub const NUMERIC_HASH: TypeTag = TypeTag::from_static("numeric_hash");
    pub const NUM_HASH: TypeTag = TypeTag::from_static("num_hash");
    pub const BOOL_HASH: TypeTag = TypeTag::from_static("bool_hash");
    pub const BOOLEAN_HASH: TypeTag = TypeTag::from_static("boolean_hash");

    /// Create a tag from a static string without allocating
    pub const fn from_static(name: &'static str) -> Self {
        TypeTag(Cow::Borrowed(name))
    }

    /// Create a tag from any string
    pub fn new(name: impl Into<String>) -> Self {
        TypeTag(Cow::Owned(name.into()))
    }

    /// The tag name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Infer the source tag of a value when the caller did not supply one
    ///
    /// Booleans and integers are checked first, a symbol names its own tag,
    /// and everything else maps to the lowercase name of its category.
    pub fn infer(value: &Value) -> TypeTag {
        match value {
            Value::Bool(_) => TypeTag::BOOLEAN,
            Value::Integer(_) => TypeTag::INTEGER,
            Value::Symbol(name) => TypeTag::new(name.as_str()),
            Value::Float(_) => TypeTag::FLOAT,
            Value::String(_) => TypeTag::STRING,
            Value::Array(_) => TypeTag::ARRAY,
            Value::Hash(_) => TypeTag::HASH,
            Value::Set(_) => TypeTag::SET,
            Value::Range(_) => TypeTag::RANGE,
            Value::Date(_) => TypeTag::DATE,
            Value::DateTime(_) => TypeTag::DATETIME,
            Value::Time(_) => TypeTag::TIME,
            Value::Nil => TypeTag::NIL,
            Value::Object(object) => TypeTag::new(object.type_name().to_lowercase()),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeTag {
    fn from(name: &str) -> Self {
        TypeTag::new(name)
    }
}

impl From<String> for TypeTag {
    fn from(name: String) -> Self {
        TypeTag::new(name)
    }
}

impl From<&TypeTag> for TypeTag {
    fn from(tag: &TypeTag) -> Self {
        tag.clone()
    }
}

impl AsRef<str> for TypeTag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
