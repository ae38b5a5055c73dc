//! Conversion context
//!
//! A [`Context`] owns a converter registry and the configuration applied to
//! every request made through it. Contexts are independent; registering a
//! converter on one does not affect another.
//!
//! Copyright (c) 2025 Alchemist Team
//! Licensed under the Apache-2.0 license

use crate::config::Configuration;
use crate::converter::Converter;
use crate::registry::ConverterRegistry;
use crate::tag::TypeTag;
use crate::target::{ConversionTarget, Input};
use crate::value::Value;
use crate::{Error, Result};

/// Entry point for conversions
#[derive(Debug, Clone)]
pub struct Context {
    registry: ConverterRegistry,
    config: Configuration,
}

impl Context {
    /// Create a lenient context with every built-in converter
    pub fn new() -> Self {
        Self::with_config(Configuration::default())
    }

    /// Create a context with the given configuration
    pub fn with_config(config: Configuration) -> Self {
        Self {
            registry: ConverterRegistry::with_builtins(),
            config,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    /// Start a conversion of `value`
    pub fn convert(&self, value: impl Into<Value>) -> ConversionTarget<'_> {
        ConversionTarget::new(self, Input::Value(value.into()))
    }

    /// Start a conversion of a value produced on demand
    pub fn convert_with<'a, F>(&'a self, produce: F) -> ConversionTarget<'a>
    where
        F: FnOnce() -> Value + 'a,
    {
        ConversionTarget::new(self, Input::Deferred(Box::new(produce)))
    }

    /// Start a conversion from exactly one of a value or a producer
    ///
    /// Supplying both, or neither, is an [`Error::InvalidArgument`].
    pub fn try_convert<'a, F>(
        &'a self,
        value: Option<Value>,
        produce: Option<F>,
    ) -> Result<ConversionTarget<'a>>
    where
        F: FnOnce() -> Value + 'a,
    {
        match (value, produce) {
            (Some(value), None) => Ok(self.convert(value)),
            (None, Some(produce)) => Ok(self.convert_with(produce)),
            (Some(_), Some(_)) => Err(Error::invalid_argument(
                "expected either a value or a producer, got both",
            )),
            (None, None) => Err(Error::invalid_argument(
                "expected either a value or a producer, got neither",
            )),
        }
    }

    /// Whether a converter exists for the pair, `object` fallback included
    pub fn can_convert(&self, source: impl Into<TypeTag>, target: impl Into<TypeTag>) -> bool {
        self.registry.contains(&source.into(), &target.into())
    }

    /// Add a converter; returns `false` if the key was already taken
    pub fn register(&mut self, converter: Converter) -> bool {
        self.registry.register(converter)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
