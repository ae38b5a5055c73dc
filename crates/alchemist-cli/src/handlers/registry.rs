//! Registry inspection handlers: `check` and `list`

use crate::cli::{CheckArgs, ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use alchemist_core::{Context, TypeTag};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Availability<'a> {
    source: &'a str,
    target: &'a str,
    available: bool,
}

/// Handle the check command
///
/// A missing conversion is reported as an error so scripts can rely on the
/// exit status.
pub fn handle_check(args: CheckArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let context = Context::with_config(config.core());
    let available = context.can_convert(args.source.as_str(), args.target.as_str());

    if output.format() == OutputFormat::Human {
        if available {
            output.success(&format!("{} -> {}: available", args.source, args.target))?;
        }
    } else {
        output.data(&Availability {
            source: &args.source,
            target: &args.target,
            available,
        })?;
    }

    if available {
        Ok(())
    } else {
        Err(Error::Unavailable {
            source_tag: args.source,
            target_tag: args.target,
        })
    }
}

/// Handle the list command
pub fn handle_list(args: ListArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let context = Context::with_config(config.core());
    let source = args.source.map(TypeTag::from);

    let keys: Vec<_> = context
        .registry()
        .keys()
        .into_iter()
        .filter(|key| source.as_ref().map_or(true, |source| &key.source == source))
        .collect();

    tracing::debug!(count = keys.len(), "Listing conversions");
    output.keys(&keys)
}
