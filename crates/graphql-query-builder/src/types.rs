//! Public types for compiled operations and formatting options.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A compiled GraphQL operation paired with its variables payload.
///
/// Serializes to the standard GraphQL HTTP request body shape:
///
/// ```json
/// {"query": "query($id: Int) { ... }", "variables": {"id": 1}}
/// ```
///
/// The variables are carried verbatim as supplied by the caller; they are
/// not checked against the `_variables` declared on the description tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub query: String,
    pub variables: Value,
}

/// Formatting options for document compilation.
///
/// `indent_size` is the number of spaces added per selection-set nesting
/// level. `initial_indent` is the base indent the root selection body and
/// closing brace are computed from, for embedding the document inside
/// already-indented output; the operation header line itself is never
/// indented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    pub indent_size: usize,
    pub initial_indent: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            indent_size: 2,
            initial_indent: 0,
        }
    }
}
