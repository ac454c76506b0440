//! Recursive compilation of description trees into GraphQL document text.
//!
//! The walk is a single depth-first pass appending to one output string,
//! with the current indent column threaded through the recursion. Nothing is
//! re-formatted after the fact; every piece is emitted left to right.

use crate::arguments::format_arguments;
use crate::types::CompileOptions;
use serde_json::{Map, Value};
use std::fmt::Write;

/// Compiles a description tree into GraphQL document text.
///
/// The node is compiled as-is: the operation header (the operation keyword
/// plus optional name and variable declarations) appears only when the node
/// carries a `_type`. Use [`crate::build_query`] or [`crate::build_mutation`]
/// to force the operation kind instead.
///
/// # Examples
///
/// ```
/// use graphql_query_builder::{compile, CompileOptions};
/// use serde_json::json;
///
/// let node = json!({
///     "_type": "query",
///     "_fields": [{ "thoughts": ["id", "name"] }],
/// });
/// let document = compile(&node, &CompileOptions::default());
/// assert_eq!(document, "query {\n  thoughts {\n    id\n    name\n  }\n}");
/// ```
#[must_use]
#[tracing::instrument(skip_all, fields(
    indent_size = options.indent_size,
    initial_indent = options.initial_indent
))]
pub fn compile(node: &Value, options: &CompileOptions) -> String {
    compile_with_kind(node, node_kind(node), options)
}

/// Compiles with the operation kind resolved by the caller, which lets the
/// entry points force `query`/`mutation` without touching the input tree.
pub(crate) fn compile_with_kind(
    node: &Value,
    kind: Option<&str>,
    options: &CompileOptions,
) -> String {
    let mut out = String::new();
    write_node(
        &mut out,
        node,
        kind,
        options.initial_indent,
        options.indent_size,
    );
    tracing::debug!(document_len = out.len(), "compiled GraphQL document");
    out
}

/// Reads the operation kind off a node's `_type` key.
pub(crate) fn node_kind(node: &Value) -> Option<&str> {
    node.get("_type")?.as_str().filter(|kind| !kind.is_empty())
}

fn write_node(out: &mut String, node: &Value, kind: Option<&str>, indent: usize, size: usize) {
    let Some(node) = node.as_object() else {
        return;
    };

    let mut body_indent = indent;
    if let Some(kind) = kind {
        out.push_str(kind);
        if let Some(name) = non_empty_str(node.get("_name")) {
            out.push(' ');
            out.push_str(name);
        }
        if let Some(variables) = node.get("_variables").and_then(Value::as_object) {
            write_variable_declarations(out, variables);
        }
        out.push_str(" {\n");
        body_indent += size;
    }

    match node.get("_fields") {
        Some(Value::Array(entries)) => write_field_list(out, entries, body_indent, size),
        Some(Value::Object(fields)) => write_field_map(out, fields, body_indent, size),
        _ => {}
    }

    if kind.is_some() {
        push_indent(out, indent);
        out.push('}');
    }
}

/// Emits `($a: ID, $b: String)` after the operation keyword.
///
/// Entries whose type is not a string are dropped silently; the parentheses
/// themselves appear whenever `_variables` is a mapping, even an empty one.
fn write_variable_declarations(out: &mut String, variables: &Map<String, Value>) {
    out.push('(');
    let mut first = true;
    for (name, ty) in variables {
        let Some(ty) = ty.as_str() else { continue };
        if !first {
            out.push_str(", ");
        }
        first = false;
        write!(out, "${name}: {ty}").unwrap();
    }
    out.push(')');
}

/// Array-style `_fields`: strings are leaf fields, single-key mappings name
/// a field whose value carries the nested selection. A single-key mapping
/// with a scalar value still emits the key as a bare leaf.
fn write_field_list(out: &mut String, entries: &[Value], indent: usize, size: usize) {
    for entry in entries {
        match entry {
            Value::String(name) => write_leaf(out, name, indent),
            Value::Object(field) => {
                let Some((name, value)) = field.iter().next() else {
                    continue;
                };
                if value.is_object() || value.is_array() {
                    write_field(out, name, value, indent, size);
                } else {
                    write_leaf(out, name, indent);
                }
            }
            _ => {}
        }
    }
}

/// Object-style `_fields`: every key is a field name, except that
/// underscore-prefixed keys are reserved and skipped. Entries without a
/// nested selection shape are dropped; the array-style form above keeps
/// them as bare leaves instead.
fn write_field_map(out: &mut String, fields: &Map<String, Value>, indent: usize, size: usize) {
    for (name, value) in fields {
        if name.starts_with('_') {
            continue;
        }
        if value.is_object() || value.is_array() {
            write_field(out, name, value, indent, size);
        }
    }
}

/// Emits one field line with optional alias and argument clause, then the
/// sub-selection block. A field whose body came out empty renders without
/// braces.
fn write_field(out: &mut String, name: &str, value: &Value, indent: usize, size: usize) {
    let mut body = String::new();
    match value {
        Value::Array(entries) => write_field_list(&mut body, entries, indent + size, size),
        _ => write_node(&mut body, value, node_kind(value), indent + size, size),
    }

    push_indent(out, indent);
    if let Some(alias) = non_empty_str(value.get("_alias")) {
        out.push_str(alias);
        out.push_str(": ");
    }
    out.push_str(name);
    if let Some(arguments) = value.get("_arguments").and_then(Value::as_object) {
        out.push('(');
        out.push_str(&format_arguments(arguments));
        out.push(')');
    }
    out.push(' ');
    if !body.is_empty() {
        out.push('{');
    }
    out.push('\n');
    out.push_str(&body);
    push_indent(out, indent);
    if !body.is_empty() {
        out.push('}');
    }
    out.push('\n');
}

fn write_leaf(out: &mut String, name: &str, indent: usize) {
    push_indent(out, indent);
    out.push_str(name);
    out.push('\n');
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value?.as_str().filter(|s| !s.is_empty())
}

fn push_indent(out: &mut String, width: usize) {
    for _ in 0..width {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_kind_requires_non_empty_string() {
        assert_eq!(node_kind(&json!({})), None);
        assert_eq!(node_kind(&json!({"_type": ""})), None);
        assert_eq!(node_kind(&json!({"_type": 1})), None);
        assert_eq!(node_kind(&json!({"_type": "mutation"})), Some("mutation"));
    }

    #[test]
    fn test_non_object_nodes_compile_to_nothing() {
        let options = CompileOptions::default();
        assert_eq!(compile(&json!(null), &options), "");
        assert_eq!(compile(&json!("thoughts"), &options), "");
        assert_eq!(compile(&json!({}), &options), "");
    }

    #[test]
    fn test_compile_without_type_emits_no_header() {
        let document = compile(&json!({"_fields": ["id", "name"]}), &CompileOptions::default());
        assert_eq!(document, "id\nname\n");
    }

    #[test]
    fn test_empty_variables_mapping_still_emits_parens() {
        let document = compile(
            &json!({"_type": "query", "_variables": {}, "_fields": ["id"]}),
            &CompileOptions::default(),
        );
        assert_eq!(document, "query() {\n  id\n}");
    }

    #[test]
    fn test_variable_declarations_drop_non_string_types() {
        let document = compile(
            &json!({
                "_type": "query",
                "_variables": {"id": "Int", "skip": null, "name": "String"},
                "_fields": ["id"],
            }),
            &CompileOptions::default(),
        );
        assert!(document.starts_with("query($id: Int, $name: String) {"));
    }

    #[test]
    fn test_unsupported_field_entries_are_skipped() {
        let document = compile(
            &json!({"_type": "query", "_fields": ["id", 42, null, ["nested"]]}),
            &CompileOptions::default(),
        );
        assert_eq!(document, "query {\n  id\n}");
    }

    #[test]
    fn test_empty_alias_falls_back_to_field_name() {
        let document = compile(
            &json!({"_type": "query", "_fields": [{"a": {"_alias": "", "_fields": ["id"]}}]}),
            &CompileOptions::default(),
        );
        assert_eq!(document, "query {\n  a {\n    id\n  }\n}");
    }
}
