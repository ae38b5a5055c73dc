//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random
//! values, tags and conversion inputs.

#![cfg(test)]

use crate::converters::Scalar;
use crate::tag::TypeTag;
use crate::value::{Endpoint, HashValue, Object, Range, Value};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

/// Strategy for generating the scalar element converters
pub fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        Just(Scalar::Integer),
        Just(Scalar::Float),
        Just(Scalar::Numeric),
        Just(Scalar::Boolean),
    ]
}

/// Strategy for generating finite floats
pub fn finite_float_strategy() -> impl Strategy<Value = f64> {
    (-1.0e9f64..1.0e9).prop_filter("finite", |f| f.is_finite())
}

/// Strategy for generating range endpoints of one kind
pub fn range_strategy() -> impl Strategy<Value = Range> {
    prop_oneof![
        (-1000i64..1000, -1000i64..1000, any::<bool>()).prop_map(|(lo, hi, exclusive)| Range {
            start: Endpoint::Integer(lo),
            end: Endpoint::Integer(hi),
            exclusive,
        }),
        (proptest::char::range('a', 'z'), proptest::char::range('a', 'z'), any::<bool>())
            .prop_map(|(lo, hi, exclusive)| Range {
                start: Endpoint::Char(lo),
                end: Endpoint::Char(hi),
                exclusive,
            }),
    ]
}

/// Strategy for generating scalar values
pub fn scalar_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        finite_float_strategy().prop_map(Value::Float),
        "[a-zA-Z0-9 ,.:=&-]{0,24}".prop_map(Value::String),
        "[a-z_]{1,12}".prop_map(Value::Symbol),
        range_strategy().prop_map(Value::Range),
    ]
}

/// Strategy for generating nested values of every shape
pub fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_value_strategy().prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..6).prop_map(Value::Array),
            vec(("[a-z]{1,6}", inner.clone()), 0..6)
                .prop_map(|pairs| Value::Hash(pairs.into_iter().collect::<HashValue>())),
            vec(inner.clone(), 0..6).prop_map(|items| Value::Set(items.into_iter().collect())),
            ("[A-Z][a-z]{1,8}", option::of(vec(inner, 0..4))).prop_map(|(name, elements)| {
                let object = Object::new(name);
                Value::Object(match elements {
                    Some(elements) => object.with_elements(elements),
                    None => object,
                })
            }),
        ]
    })
}

/// Strategy for generating separator-delimited lists of integers
pub fn integer_list_strategy() -> impl Strategy<Value = (Vec<i64>, char)> {
    (vec(0i64..100_000, 1..8), prop_oneof![Just(','), Just('-')])
}

/// Strategy for generating tags that have no registered converters
pub fn unknown_tag_strategy() -> impl Strategy<Value = TypeTag> {
    "custom_[a-z]{1,10}".prop_map(TypeTag::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_value_strategy_generates_displayable_values(value in value_strategy()) {
            // Every shape has a textual form
            let _ = value.to_string();
            prop_assert!(serde_json::to_string(&value).is_ok());
        }

        #[test]
        fn test_range_strategy_expands(range in range_strategy()) {
            prop_assert!(range.to_values().is_some());
        }

        #[test]
        fn test_unknown_tags_are_not_builtin(tag in unknown_tag_strategy()) {
            prop_assert!(tag.as_str().starts_with("custom_"));
        }
    }
}
