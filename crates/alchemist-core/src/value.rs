//! Loosely-typed values flowing through the converters
//!
//! [`Value`] is the closed set of shapes a host can hand to a conversion:
//! scalars, containers, calendar values and opaque host objects. Every
//! converter consumes and produces `Value`s, so lenient converters can hand
//! back their input unchanged when they cannot do better.

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Insertion-ordered string-keyed map used for hash values
pub type HashValue = IndexMap<String, Value>;

/// A loosely-typed value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// The canonical absent value
    Nil,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// A pre-tagged atom; type inference uses its name as the source tag
    Symbol(String),
    Array(Vec<Value>),
    Hash(HashValue),
    Set(ValueSet),
    Range(Range),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveDateTime),
    Object(Object),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Convert into a JSON value, stringifying calendar values
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    fn fmt_inspect(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{:?}", s),
            Value::Symbol(s) => write!(f, ":{}", s),
            Value::Nil => f.write_str("nil"),
            other => write!(f, "{}", other),
        }
    }
}

/// Textual form of a value, as parsed by the scalar converters
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => fmt_float(*n, f),
            Value::String(s) | Value::Symbol(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_inspect(f)?;
                }
                f.write_str("]")
            }
            Value::Hash(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: ", key)?;
                    value.fmt_inspect(f)?;
                }
                f.write_str("}")
            }
            Value::Set(set) => {
                f.write_str("#<Set: {")?;
                for (i, item) in set.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_inspect(f)?;
                }
                f.write_str("}>")
            }
            Value::Range(range) => write!(f, "{}", range),
            Value::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Value::Time(time) => write!(f, "{}", time.format("%Y-%m-%d %H:%M:%S")),
            Value::Object(object) => write!(f, "#<{}>", object.type_name()),
        }
    }
}

/// Floats always print with a fractional part so `1.0` does not re-parse as
/// an integer
fn fmt_float(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n.fract() == 0.0 && n.abs() < 1e16 {
        write!(f, "{:.1}", n)
    } else {
        write!(f, "{}", n)
    }
}

/// Unordered collection of distinct values
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ValueSet(Vec<Value>);

impl ValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning false if an equal value is already present
    pub fn insert(&mut self, value: Value) -> bool {
        if self.0.contains(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.0.contains(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }
}

impl PartialEq for ValueSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}

impl FromIterator<Value> for ValueSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = ValueSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

/// One end of a range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Endpoint {
    Integer(i64),
    Float(f64),
    Char(char),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Integer(n) => write!(f, "{}", n),
            Endpoint::Float(n) => fmt_float(*n, f),
            Endpoint::Char(c) => write!(f, "{}", c),
        }
    }
}

/// Largest number of members [`Range::to_values`] will enumerate
pub const MAX_EXPANDED_RANGE: u64 = 1_000_000;

/// Numeric or character interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub start: Endpoint,
    pub end: Endpoint,
    /// Whether `end` is excluded
    pub exclusive: bool,
}

impl Range {
    /// Range including its upper bound
    pub fn inclusive(start: Endpoint, end: Endpoint) -> Self {
        Self { start, end, exclusive: false }
    }

    /// Range excluding its upper bound
    pub fn exclusive(start: Endpoint, end: Endpoint) -> Self {
        Self { start, end, exclusive: true }
    }

    /// Check whether a number or character falls inside the range
    pub fn contains(&self, point: Endpoint) -> bool {
        fn num(e: Endpoint) -> Option<f64> {
            match e {
                Endpoint::Integer(n) => Some(n as f64),
                Endpoint::Float(n) => Some(n),
                Endpoint::Char(_) => None,
            }
        }
        let upper_ok = |ord: std::cmp::Ordering| {
            if self.exclusive {
                ord == std::cmp::Ordering::Less
            } else {
                ord != std::cmp::Ordering::Greater
            }
        };
        match (self.start, self.end, point) {
            (Endpoint::Char(lo), Endpoint::Char(hi), Endpoint::Char(c)) => {
                lo <= c && upper_ok(c.cmp(&hi))
            }
            (lo, hi, p) => match (num(lo), num(hi), num(p)) {
                (Some(lo), Some(hi), Some(p)) => {
                    lo <= p && p.partial_cmp(&hi).map(upper_ok).unwrap_or(false)
                }
                _ => false,
            },
        }
    }

    /// Number of members an integer or character range would enumerate
    ///
    /// `None` for float or mixed endpoints, and for integer spans too wide to
    /// count in a `u64`.
    pub fn count(&self) -> Option<u64> {
        let inclusive = u64::from(!self.exclusive);
        match (self.start, self.end) {
            (Endpoint::Integer(lo), Endpoint::Integer(hi)) => {
                if hi < lo {
                    return Some(0);
                }
                let span = (hi as i128 - lo as i128) as u64;
                span.checked_add(inclusive)
            }
            (Endpoint::Char(lo), Endpoint::Char(hi)) => {
                if hi < lo {
                    return Some(0);
                }
                u64::from(u32::from(hi) - u32::from(lo)).checked_add(inclusive)
            }
            _ => None,
        }
    }

    /// Enumerate the members of an integer or character range
    ///
    /// Returns `None` when the endpoints cannot be stepped through (floats or
    /// mixed endpoint kinds) or the range holds more than
    /// [`MAX_EXPANDED_RANGE`] members.
    pub fn to_values(&self) -> Option<Vec<Value>> {
        let count = self.count()?;
        if count > MAX_EXPANDED_RANGE {
            return None;
        }
        match (self.start, self.end) {
            (Endpoint::Integer(lo), Endpoint::Integer(hi)) => {
                let values = if self.exclusive {
                    (lo..hi).map(Value::Integer).collect()
                } else {
                    (lo..=hi).map(Value::Integer).collect()
                };
                Some(values)
            }
            (Endpoint::Char(lo), Endpoint::Char(hi)) => {
                let values = if self.exclusive {
                    (lo..hi).map(|c| Value::String(c.to_string())).collect()
                } else {
                    (lo..=hi).map(|c| Value::String(c.to_string())).collect()
                };
                Some(values)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dots = if self.exclusive { "..." } else { ".." };
        write!(f, "{}{}{}", self.start, dots, self.end)
    }
}

/// Host-defined value outside the built-in categories
///
/// `elements` stands in for a value that knows how to present itself as a
/// sequence; the `object -> array` converter uses it when present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Object {
    #[serde(rename = "type")]
    type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    elements: Option<Vec<Value>>,
}

impl Object {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            elements: None,
        }
    }

    /// Attach the sequence form of this object
    pub fn with_elements(mut self, elements: Vec<Value>) -> Self {
        self.elements = Some(elements);
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn elements(&self) -> Option<&[Value]> {
        self.elements.as_deref()
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Range> for Value {
    fn from(range: Range) -> Self {
        Value::Range(range)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<HashValue> for Value {
    fn from(pairs: HashValue) -> Self {
        Value::Hash(pairs)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Hash(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}
