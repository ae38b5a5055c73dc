//! Convert command handler

use crate::cli::ConvertArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{ConversionReport, OutputWriter};
use alchemist_core::{Context, TypeTag, Value};

/// Turn the raw command-line argument into the value to convert
fn parse_input(args: &ConvertArgs) -> Result<Value> {
    if !args.json {
        return Ok(Value::String(args.value.clone()));
    }
    let json: serde_json::Value = serde_json::from_str(&args.value)
        .map_err(|e| Error::invalid_args(format!("--json expects a JSON value: {}", e)))?;
    Ok(Value::from(json))
}

/// Handle the convert command
pub fn handle_convert(args: ConvertArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let context = Context::with_config(config.core());
    let value = parse_input(&args)?;

    let source = args
        .from
        .as_deref()
        .map(TypeTag::from)
        .unwrap_or_else(|| TypeTag::infer(&value));
    let target = TypeTag::from(args.to.as_str());
    let strict = args.strictness().unwrap_or(context.config().strict);

    tracing::info!(%source, %target, strict, "Converting value");

    let result = context
        .convert(value)
        .from(source.clone())
        .strict(strict)
        .to(target.clone())?;

    output.conversion(&ConversionReport {
        source: source.to_string(),
        target: target.to_string(),
        strict,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::handlers::test_support::{capture, lenient};

    fn args(value: &str, to: &str) -> ConvertArgs {
        ConvertArgs {
            value: value.to_string(),
            to: to.to_string(),
            from: None,
            strict: false,
            lenient: false,
            json: false,
        }
    }

    #[test]
    fn test_convert_human() {
        let (mut output, captured) = capture(OutputFormat::Human, false);
        handle_convert(args("1..5", "range"), &lenient(), &mut output).unwrap();
        assert_eq!(captured.contents(), "1..5\n");
    }

    #[test]
    fn test_convert_json_input() {
        let (mut output, captured) = capture(OutputFormat::Json, false);
        let mut request = args(r#"["1", "2.5", "x"]"#, "numeric");
        request.json = true;
        handle_convert(request, &lenient(), &mut output).unwrap();

        let report: serde_json::Value = serde_json::from_str(&captured.contents()).unwrap();
        assert_eq!(report["source"], "array");
        assert_eq!(report["result"], serde_json::json!([1, 2.5, "x"]));
    }

    #[test]
    fn test_strict_flag_and_config_default() {
        let (mut output, _) = capture(OutputFormat::Human, false);
        let mut request = args("12abc", "integer");
        request.strict = true;
        let err = handle_convert(request, &lenient(), &mut output).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let mut strict_config = Config::default();
        strict_config.conversion.strict = true;
        assert!(handle_convert(args("12abc", "integer"), &strict_config, &mut output).is_err());

        let (mut output, captured) = capture(OutputFormat::Human, false);
        let mut request = args("12abc", "integer");
        request.lenient = true;
        handle_convert(request, &strict_config, &mut output).unwrap();
        assert_eq!(captured.contents(), "12\n");
    }

    #[test]
    fn test_explicit_source() {
        let (mut output, captured) = capture(OutputFormat::Human, false);
        let mut request = args("42", "string");
        request.from = Some("integer".to_string());
        handle_convert(request, &lenient(), &mut output).unwrap();
        assert_eq!(captured.contents(), "42\n");
    }

    #[test]
    fn test_unknown_conversion() {
        let (mut output, _) = capture(OutputFormat::Human, false);
        let err = handle_convert(args("x", "widget"), &lenient(), &mut output).unwrap_err();
        assert_eq!(err.to_string(), "Conversion 'string->widget' unavailable.");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_invalid_json() {
        let (mut output, _) = capture(OutputFormat::Human, false);
        let mut request = args("{oops", "hash");
        request.json = true;
        let err = handle_convert(request, &lenient(), &mut output).unwrap_err();
        assert!(err.should_show_help());
    }
}
