//! Fluent conversion requests
//!
//! A [`ConversionTarget`] binds a value (or a deferred producer of one) to a
//! [`Context`]. The source tag is inferred from the value unless `from`
//! names it, and nothing runs until `to` is called.

use crate::context::Context;
use crate::tag::TypeTag;
use crate::value::Value;
use crate::Result;
use std::fmt;

/// The value a request converts
pub(crate) enum Input<'a> {
    Value(Value),
    Deferred(Box<dyn FnOnce() -> Value + 'a>),
}

impl Input<'_> {
    fn resolve(self) -> Value {
        match self {
            Input::Value(value) => value,
            Input::Deferred(produce) => produce(),
        }
    }
}

impl fmt::Debug for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Input::Deferred(_) => f.write_str("Deferred"),
        }
    }
}

/// A pending conversion created by [`Context::convert`]
#[derive(Debug)]
#[must_use = "a conversion request does nothing until `to` is called"]
pub struct ConversionTarget<'a> {
    context: &'a Context,
    input: Input<'a>,
    source: Option<TypeTag>,
    strict: Option<bool>,
}

impl<'a> ConversionTarget<'a> {
    pub(crate) fn new(context: &'a Context, input: Input<'a>) -> Self {
        Self {
            context,
            input,
            source: None,
            strict: None,
        }
    }

    /// Override the inferred source tag
    pub fn from(mut self, source: impl Into<TypeTag>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Choose strict or lenient mode for this request only
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    /// Run the conversion into `target`
    ///
    /// # Examples
    ///
    /// ```
    /// use alchemist_core::{Context, Value};
    ///
    /// let context = Context::new();
    /// let value = context.convert("1,2,3").to("integers").unwrap();
    /// assert_eq!(value, Value::from(vec![1i64, 2, 3]));
    /// ```
    pub fn to(self, target: impl Into<TypeTag>) -> Result<Value> {
        let target = target.into();
        let value = self.input.resolve();
        let source = self.source.unwrap_or_else(|| TypeTag::infer(&value));
        let strict = self.strict.unwrap_or(self.context.config().strict);

        let converter = self.context.registry().lookup(&source, &target)?;
        converter.call(&value, strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;
    use crate::Configuration;
    use std::cell::Cell;

    #[test]
    fn test_inferred_source() {
        let context = Context::new();
        assert_eq!(context.convert("42").to("integer").unwrap(), Value::Integer(42));
        assert_eq!(context.convert(1i64).to("boolean").unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_explicit_source_overrides_inference() {
        let context = Context::new();
        let err = context.convert("1").from("float").to("integer").unwrap_err();
        assert_eq!(err.to_string(), "Conversion 'float->integer' unavailable.");
    }

    #[test]
    fn test_request_strictness_overrides_context() {
        let context = Context::with_config(Configuration::new().strict(true));
        assert!(context.convert("1abc").to("integer").is_err());
        assert_eq!(
            context.convert("1abc").strict(false).to("integer").unwrap(),
            Value::Integer(1)
        );
    }

    #[test]
    fn test_deferred_value_runs_on_to() {
        let context = Context::new();
        let calls = Cell::new(0);
        let request = context.convert_with(|| {
            calls.set(calls.get() + 1);
            Value::from("yes")
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(request.to("boolean").unwrap(), Value::Bool(true));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unknown_object_uses_fallback() {
        let context = Context::new();
        let point = Object::new("Point").with_elements(vec![1i64.into(), 2i64.into()]);
        let object = Value::Object(point);
        assert_eq!(context.convert(object).to("array").unwrap(), Value::from(vec![1i64, 2]));
    }
}
