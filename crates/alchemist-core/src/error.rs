//! Error types for the Alchemist core library
//!
//! This module defines the error handling system for Alchemist, using
//! thiserror for ergonomic error definitions. Registry misses, converter
//! grammar failures and caller misuse are kept as distinct variants so hosts
//! can react to each of them separately.

use crate::tag::TypeTag;
use crate::value::Value;
use thiserror::Error;

/// Main error type for Alchemist operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// No converter is registered for the requested pair, even after the
    /// `object` fallback
    #[error("Conversion '{key}' unavailable.")]
    NoTypeConversionAvailable {
        /// The originally requested `source->target` key
        key: String,
    },

    /// A converter ran in strict mode and its input failed the grammar or
    /// shape check
    #[error("'{value}' could not be converted from `{from}` into `{to}`")]
    ConversionType {
        value: Value,
        from: TypeTag,
        to: TypeTag,
    },

    /// The caller invoked the API incorrectly
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a conversion type error for a value rejected by a converter
    pub fn conversion_type(value: &Value, source: &TypeTag, target: &TypeTag) -> Self {
        Error::ConversionType {
            value: value.clone(),
            from: source.clone(),
            to: target.clone(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check whether this error came from a strict-mode converter
    pub fn is_conversion_type(&self) -> bool {
        matches!(self, Error::ConversionType { .. })
    }

    /// Check whether this error came from a registry miss
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Error::NoTypeConversionAvailable { .. })
    }
}
