//! Configuration management for the CLI
//!
//! This module handles loading and merging configuration from:
//! - Default values
//! - Configuration files (JSON/YAML/TOML)
//! - Environment variables
//! - Command-line arguments

use crate::error::{Error, Result};
use alchemist_core::Configuration;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Conversion defaults
    pub conversion: ConversionConfig,

    /// Logging settings
    pub logging: LoggingSettings,
}

/// Conversion defaults applied when a command does not choose
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Fail on unparseable input instead of returning a best-effort value
    pub strict: bool,
}

/// Logging settings read from the configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Yaml,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Ok(FileFormat::Json),
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("toml") => Ok(FileFormat::Toml),
            _ => Err(Error::InvalidFormat {
                path: path.to_path_buf(),
                expected: "JSON, YAML or TOML".to_string(),
            }),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config = match format {
            FileFormat::Yaml => serde_yaml::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
            FileFormat::Json => serde_json::from_str(&content)?,
        };

        tracing::debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations,
    /// then apply environment overrides
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::load()?,
        };
        config.merge_with_env();
        Ok(config)
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".alchemist.toml"),
            PathBuf::from(".alchemist.yaml"),
            PathBuf::from(".alchemist.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let alchemist_dir = config_dir.join("alchemist");
            paths.push(alchemist_dir.join("config.toml"));
            paths.push(alchemist_dir.join("config.yaml"));
            paths.push(alchemist_dir.join("config.json"));
        }

        paths
    }

    /// Apply environment overrides on top of the loaded values
    pub fn merge_with_env(&mut self) {
        let mut core = self.core();
        core.merge_with_env();
        self.conversion.strict = core.strict;
    }

    /// The core configuration a conversion context is built from
    pub fn core(&self) -> Configuration {
        Configuration::new().strict(self.conversion.strict)
    }
}
