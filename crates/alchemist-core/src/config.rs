//! Conversion context configuration
//!
//! The configuration is threaded explicitly into each [`Context`](crate::Context);
//! nothing here is global. A request may still override strictness per call.

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`Configuration::from_env`]
pub const STRICT_ENV_VAR: &str = "ALCHEMIST_STRICT";

/// Settings shared by every conversion made through one context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Default strictness for requests that do not choose one
    pub strict: bool,
}

impl Configuration {
    /// Create the default (lenient) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default strictness
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build a configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.merge_with_env();
        config
    }

    /// Apply environment overrides on top of the current values
    pub fn merge_with_env(&mut self) {
        if let Ok(raw) = std::env::var(STRICT_ENV_VAR) {
            match parse_flag(&raw) {
                Some(strict) => self.strict = strict,
                None => log::warn!("Ignoring invalid {} value: {}", STRICT_ENV_VAR, raw),
            }
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
