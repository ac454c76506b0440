//! Argument literal formatting.
//!
//! Renders the `_arguments` mapping of a field into the comma-separated
//! `name: value` list that goes between the parentheses. Values format
//! recursively; strings are quoted unless they are `$`-prefixed variable
//! references, and scalars with no special grammar fall back to their
//! default textual form rather than failing.

use serde_json::{Map, Value};

/// Formats an `_arguments` mapping as `k1: v1, k2: v2`.
///
/// The caller supplies the surrounding parentheses. Entries appear in
/// insertion order.
pub(crate) fn format_arguments(arguments: &Map<String, Value>) -> String {
    let mut out = String::new();
    for (i, (name, value)) in arguments.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(name);
        out.push_str(": ");
        out.push_str(&format_argument_value(value));
    }
    out
}

/// Formats a single argument value as a GraphQL literal.
///
/// Strings starting with `$` pass through verbatim as variable references.
/// The `Bool` and `Number` arms are the fallback for scalars the grammar
/// gives no special treatment; they stringify rather than error.
pub(crate) fn format_argument_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::String(s) if s.starts_with('$') => s.clone(),
        Value::String(s) => format!("\"{}\"", escape_string(s)),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(format_argument_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(fields) => {
            let fields: Vec<String> = fields
                .iter()
                .map(|(name, value)| format!("{name}: {}", format_argument_value(value)))
                .collect();
            format!("{{{}}}", fields.join(", "))
        }
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
    }
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
