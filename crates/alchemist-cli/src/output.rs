//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable).

use crate::cli::OutputFormat;
use crate::error::Result;
use alchemist_core::{ConversionKey, Value};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use tracing::trace;

#[cfg(test)]
mod tests;

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format the outcome of a conversion
    fn format_conversion(&self, report: &ConversionReport) -> Result<String>;

    /// Format a list of conversion keys
    fn format_keys(&self, keys: &[ConversionKey]) -> Result<String>;
}

/// What a `convert` run produced
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub source: String,
    pub target: String,
    pub strict: bool,
    pub result: Value,
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty | OutputFormat::Human => {
                Ok(serde_json::to_string_pretty(value)?)
            }
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }

    fn format_conversion(&self, report: &ConversionReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(report.result.to_string()),
            _ => self.format(report),
        }
    }

    fn format_keys(&self, keys: &[ConversionKey]) -> Result<String> {
        let names: Vec<String> = keys.iter().map(ToString::to_string).collect();
        match self {
            OutputFormat::Human => Ok(names.join("\n")),
            _ => self.format(&names),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a success message (human format only)
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        self.writeln(formatted.trim_end())
    }

    /// Write a conversion result
    pub fn conversion(&mut self, report: &ConversionReport) -> Result<()> {
        trace!(source = %report.source, target = %report.target, "Writing conversion result");
        let formatted = self.format.format_conversion(report)?;
        self.writeln(formatted.trim_end())
    }

    /// Write a list of conversion keys
    pub fn keys(&mut self, keys: &[ConversionKey]) -> Result<()> {
        let formatted = self.format.format_keys(keys)?;
        if formatted.is_empty() {
            return Ok(());
        }
        self.writeln(formatted.trim_end())
    }
}
