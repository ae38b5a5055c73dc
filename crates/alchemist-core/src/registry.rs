//! Conversion registry
//!
//! Converters are stored under a [`ConversionKey`] built from their source and
//! target tags. Lookup tries the exact pair first and falls back once to the
//! `object` wildcard source.
//!
//! Copyright (c) 2025 Alchemist Team
//! Licensed under the Apache-2.0 license

use crate::converter::Converter;
use crate::converters::{array, boolean, date_time, hash, numeric, range};
use crate::tag::TypeTag;
use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt;

/// Separator between the two tags of a rendered key
pub const DELIMITER: &str = "->";

/// Registry key: an ordered `(source, target)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversionKey {
    pub source: TypeTag,
    pub target: TypeTag,
}

impl ConversionKey {
    pub fn new(source: impl Into<TypeTag>, target: impl Into<TypeTag>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for ConversionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.source, DELIMITER, self.target)
    }
}

/// Table of converters keyed by `(source, target)`
#[derive(Debug, Clone, Default)]
pub struct ConverterRegistry {
    converters: HashMap<ConversionKey, Converter>,
}

impl ConverterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in converter
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.load();
        registry
    }

    /// Register every built-in converter family
    pub fn load(&mut self) {
        array::load(self);
        boolean::load(self);
        date_time::load(self);
        numeric::load(self);
        range::load(self);
        hash::load(self);
        log::debug!("Loaded {} built-in converters", self.converters.len());
    }

    /// Register a converter
    ///
    /// The first registration for a key wins; a later one is ignored and
    /// reported as `false`.
    pub fn register(&mut self, converter: Converter) -> bool {
        let key = converter.key();
        if self.converters.contains_key(&key) {
            log::debug!("Converter '{}' already registered, ignoring", key);
            return false;
        }
        self.converters.insert(key, converter);
        true
    }

    /// Find the converter for `source -> target`
    ///
    /// A miss on the exact pair retries with the `object` source before
    /// failing with [`Error::NoTypeConversionAvailable`] naming the original
    /// pair.
    pub fn lookup(&self, source: &TypeTag, target: &TypeTag) -> Result<&Converter> {
        let key = ConversionKey::new(source, target);
        if let Some(converter) = self.converters.get(&key) {
            return Ok(converter);
        }

        let fallback = ConversionKey::new(TypeTag::OBJECT, target);
        match self.converters.get(&fallback) {
            Some(converter) => {
                log::trace!("No converter for '{}', using '{}'", key, fallback);
                Ok(converter)
            }
            None => Err(Error::NoTypeConversionAvailable {
                key: key.to_string(),
            }),
        }
    }

    /// Whether `lookup` would succeed for the pair
    pub fn contains(&self, source: &TypeTag, target: &TypeTag) -> bool {
        self.lookup(source, target).is_ok()
    }

    /// Every registered key, sorted by rendered name
    pub fn keys(&self) -> Vec<ConversionKey> {
        let mut keys: Vec<_> = self.converters.keys().cloned().collect();
        keys.sort_by_cached_key(|key| key.to_string());
        keys
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}
