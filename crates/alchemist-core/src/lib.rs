//! Alchemist Core - Strict and lenient conversion of loosely-typed values
//!
//! This crate converts text and other loosely-typed values into semantic
//! types (integers, floats, booleans, dates, ranges, arrays, hashes, sets)
//! through a registry of converters keyed by `(source, target)` type tags.
//!
//! # Main Components
//!
//! - **Values**: [`Value`], the closed set of runtime shapes a conversion sees
//! - **Type Tags**: [`TypeTag`] names conversion endpoints and is inferred from values
//! - **Registry**: [`ConverterRegistry`] with exact lookup and `object` fallback
//! - **Converters**: built-in families under [`converters`] plus host functions
//! - **Context**: [`Context`] and the fluent [`ConversionTarget`] request
//!
//! # Example
//!
//! ```
//! use alchemist_core::{Context, Result, Value};
//!
//! fn example() -> Result<()> {
//!     let context = Context::new();
//!
//!     assert_eq!(context.convert("1,2,3").to("array")?, Value::from(vec!["1", "2", "3"]));
//!     assert_eq!(context.convert("").to("integer")?, Value::Integer(0));
//!     assert!(context.convert("").strict(true).to("integer").is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod context;
pub mod converter;
pub mod converters;
pub mod error;
pub mod registry;
pub mod tag;
pub mod target;
pub mod value;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use config::Configuration;
pub use context::Context;
pub use converter::{Converter, ConverterFunction, ConverterKind};
pub use error::{Error, Result};
pub use registry::{ConversionKey, ConverterRegistry};
pub use tag::TypeTag;
pub use target::ConversionTarget;
pub use value::{Endpoint, HashValue, Object, Range, Value, ValueSet, MAX_EXPANDED_RANGE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Create a context configured from the environment
///
/// Reads `ALCHEMIST_STRICT` to choose the default strictness.
pub fn new_context() -> Context {
    Context::with_config(Configuration::from_env())
}
