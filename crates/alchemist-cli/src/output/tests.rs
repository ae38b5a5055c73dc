// Tests for output formatting
//
// Output goes to an in-memory buffer so the written bytes can be inspected.

use super::*;
use crate::handlers::test_support::capture as writer;

fn report() -> ConversionReport {
    ConversionReport {
        source: "string".to_string(),
        target: "integers".to_string(),
        strict: true,
        result: Value::from(vec![1i64, 2, 3]),
    }
}

#[test]
fn test_conversion_human() {
    let (mut output, buffer) = writer(OutputFormat::Human, false);
    output.conversion(&report()).unwrap();
    assert_eq!(buffer.contents(), "[1, 2, 3]\n");
}

#[test]
fn test_conversion_json() {
    let (mut output, buffer) = writer(OutputFormat::Json, false);
    output.conversion(&report()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({
            "source": "string",
            "target": "integers",
            "strict": true,
            "result": [1, 2, 3]
        })
    );
}

#[test]
fn test_conversion_yaml() {
    let (mut output, buffer) = writer(OutputFormat::Yaml, false);
    output.conversion(&report()).unwrap();
    assert!(buffer.contents().contains("target: integers"));
}

#[test]
fn test_keys_human_and_json() {
    let keys = vec![
        ConversionKey::new("string", "integer"),
        ConversionKey::new("string", "range"),
    ];

    let (mut output, buffer) = writer(OutputFormat::Human, false);
    output.keys(&keys).unwrap();
    assert_eq!(buffer.contents(), "string->integer\nstring->range\n");

    let (mut output, buffer) = writer(OutputFormat::Json, false);
    output.keys(&keys).unwrap();
    assert_eq!(buffer.contents(), "[\"string->integer\",\"string->range\"]\n");
}

#[test]
fn test_quiet_suppresses_messages_only() {
    let (mut output, buffer) = writer(OutputFormat::Human, true);
    output.success("done").unwrap();
    output.conversion(&report()).unwrap();
    assert_eq!(buffer.contents(), "[1, 2, 3]\n");
}

#[test]
fn test_messages_skipped_for_machine_formats() {
    let (mut output, buffer) = writer(OutputFormat::Json, false);
    output.success("done").unwrap();
    assert_eq!(buffer.contents(), "");
    assert_eq!(output.format(), OutputFormat::Json);
}
