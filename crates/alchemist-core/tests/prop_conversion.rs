//! Property-based tests for the conversion engine
//!
//! These tests verify invariants that should hold for all inputs to the
//! public context API.

use alchemist_core::{Context, Error, Value};
use proptest::prelude::*;

/// Strategy for generating short printable strings
fn text_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,20}"
}

/// Strategy for generating built-in targets that accept string input
fn string_target_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("integer"),
        Just("float"),
        Just("numeric"),
        Just("boolean"),
        Just("array"),
        Just("integers"),
        Just("floats"),
        Just("booleans"),
        Just("range"),
        Just("hash"),
        Just("int_hash"),
    ]
}

proptest! {
    #[test]
    fn prop_integer_round_trip(n in any::<i64>()) {
        let context = Context::new();
        let text = context.convert(n).from("integer").to("string").unwrap();
        let back = context.convert(text).from("string").strict(true).to("integer").unwrap();
        prop_assert_eq!(back, Value::Integer(n));
    }

    #[test]
    fn prop_strict_success_matches_lenient(
        text in text_strategy(),
        target in string_target_strategy(),
    ) {
        let context = Context::new();
        if let Ok(strict) = context.convert(text.as_str()).strict(true).to(target) {
            let lenient = context.convert(text.as_str()).strict(false).to(target).unwrap();
            prop_assert_eq!(lenient, strict);
        }
    }

    #[test]
    fn prop_lenient_string_conversions_never_fail(
        text in text_strategy(),
        target in string_target_strategy(),
    ) {
        let context = Context::new();
        prop_assert!(context.convert(text.as_str()).to(target).is_ok());
    }

    #[test]
    fn prop_strict_failures_are_conversion_errors(
        text in text_strategy(),
        target in string_target_strategy(),
    ) {
        let context = Context::new();
        if let Err(err) = context.convert(text.as_str()).strict(true).to(target) {
            prop_assert!(matches!(err, Error::ConversionType { .. }), "unexpected error: {}", err);
        }
    }

    #[test]
    fn prop_null_converters_are_identity(n in any::<i64>(), b in any::<bool>()) {
        let context = Context::new();
        prop_assert_eq!(context.convert(n).to("integer").unwrap(), Value::Integer(n));
        prop_assert_eq!(context.convert(b).strict(true).to("boolean").unwrap(), Value::Bool(b));
    }
}

#[test]
fn test_every_registered_key_is_convertible() {
    let context = Context::new();
    for key in context.registry().keys() {
        assert!(context.can_convert(key.source.clone(), key.target.clone()), "{}", key);
        let result = context
            .convert(Value::from(""))
            .from(key.source.clone())
            .to(key.target.clone());
        assert!(!matches!(result, Err(Error::NoTypeConversionAvailable { .. })), "{}", key);
    }
}
