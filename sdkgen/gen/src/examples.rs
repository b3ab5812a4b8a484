//! Pretty-printing of example value trees as literal expressions.
//!
//! Objects become associative literals with one `"key" => value` entry per
//! line in document order, arrays list one element per line, strings are
//! double-quoted with embedded quotes escaped, and every other scalar uses its
//! natural text form.

use serde_json::Value;
use sdkgen_define::Example;

use crate::render::INDENT;

/// Renders a value tree whose closing bracket sits at `indent`.
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use sdkgen_gen::examples::format_value;
///
/// let value = json!({"TableName": "Music", "Limit": 10, "Keys": ["a", "b"]});
/// assert_eq!(
///     format_value(&value, ""),
///     "[\n    \"TableName\" => \"Music\",\n    \"Limit\" => 10,\n    \"Keys\" => [\n        \"a\",\n        \"b\"\n    ]\n]"
/// );
/// ```
pub fn format_value(value: &Value, indent: &str) -> String {
    let inner = format!("{indent}{INDENT}");
    match value {
        Value::Object(map) if map.is_empty() => "[]".to_string(),
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{inner}{} => {}", quote(k), format_value(v, &inner)))
                .collect();
            format!("[\n{}\n{indent}]", entries.join(",\n"))
        }
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let entries: Vec<String> = items
                .iter()
                .map(|v| format!("{inner}{}", format_value(v, &inner)))
                .collect();
            format!("[\n{}\n{indent}]", entries.join(",\n"))
        }
        Value::String(s) => quote(s),
        other => other.to_string(),
    }
}

/// Renders the documentation block for one worked example.
pub(crate) fn format_example(example: &Example) -> String {
    let mut block = format!("# Example: {}", example.title.trim());
    let description = example.description.trim();
    if !description.is_empty() {
        block.push_str("\n\n");
        block.push_str(description);
    }
    if let Some(input) = &example.input {
        block.push_str(&format!("\n\nInput:\n```\n{}\n```", format_value(input, "")));
    }
    if let Some(output) = &example.output {
        block.push_str(&format!("\n\nOutput:\n```\n{}\n```", format_value(output, "")));
    }
    block
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
