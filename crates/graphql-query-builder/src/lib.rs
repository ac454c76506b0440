//! Declarative GraphQL operation building.
//!
//! This crate compiles a plain, JSON-shaped description of a GraphQL
//! operation ([`serde_json::Value`] trees, typically built with the
//! [`serde_json::json!`] macro) into a GraphQL document string, together
//! with a separate variables payload. It is a structural compiler rather
//! than a GraphQL engine; it performs no schema validation and never parses
//! GraphQL text back into values.
//!
//! Description trees reserve the underscore-prefixed control keys `_type`,
//! `_name`, `_alias`, `_variables`, `_arguments`, and `_fields`. Everything
//! else in selection position is treated as a field name, which is also how
//! inline fragments (`"... on Type"`) pass through unchanged.
//!
//! # Examples
//!
//! ## Building a full operation payload
//!
//! ```
//! use graphql_query_builder::build_operation;
//! use serde_json::json;
//!
//! # fn main() -> graphql_query_builder::Result<()> {
//! let operation = build_operation(
//!     &json!({
//!         "_variables": { "id": "Int" },
//!         "_fields": [
//!             { "thought": { "_arguments": { "id": "$id" }, "_fields": ["id", "name"] } },
//!         ],
//!     }),
//!     json!({ "id": 1 }),
//! )?;
//! assert_eq!(
//!     operation.query,
//!     "query($id: Int) {\n  thought(id: $id) {\n    id\n    name\n  }\n}"
//! );
//! assert_eq!(operation.variables, json!({ "id": 1 }));
//! # Ok(())
//! # }
//! ```
//!
//! ## Compiling a document string directly
//!
//! ```
//! use graphql_query_builder::{build_query, CompileOptions};
//! use serde_json::json;
//!
//! let node = json!({ "_fields": [{ "thoughts": ["id", "name"] }] });
//! let document = build_query(&node, &CompileOptions::default());
//! assert_eq!(document, "query {\n  thoughts {\n    id\n    name\n  }\n}");
//! ```

mod arguments;
mod compile;
mod error;
mod types;

pub use compile::compile;
pub use error::{QueryBuildError, Result};
pub use types::{CompileOptions, Operation};

use serde_json::Value;

/// Compiles the description as a `query`, overriding any `_type` the node
/// carries. The input tree is never modified.
#[must_use]
pub fn build_query(node: &Value, options: &CompileOptions) -> String {
    compile::compile_with_kind(node, Some("query"), options)
}

/// Compiles the description as a `mutation`, overriding any `_type` the
/// node carries. The input tree is never modified.
#[must_use]
pub fn build_mutation(node: &Value, options: &CompileOptions) -> String {
    compile::compile_with_kind(node, Some("mutation"), options)
}

/// Compiles a root description into an [`Operation`] ready to serialize as
/// a GraphQL request body.
///
/// The operation kind comes from the node's `_type`, defaulting to `query`
/// when absent. The supplied variables are attached to the result verbatim;
/// they are not checked against the `_variables` declared on the node.
///
/// # Errors
///
/// Returns [`QueryBuildError::InvalidRoot`] when the node has neither a
/// `_type` nor a `_fields` selection.
#[tracing::instrument(skip_all)]
pub fn build_operation(node: &Value, variables: Value) -> Result<Operation> {
    let kind = compile::node_kind(node);
    let has_fields = node
        .get("_fields")
        .is_some_and(|fields| fields.is_array() || fields.is_object());
    if kind.is_none() && !has_fields {
        return Err(QueryBuildError::InvalidRoot);
    }

    let query = compile::compile_with_kind(
        node,
        Some(kind.unwrap_or("query")),
        &CompileOptions::default(),
    );
    Ok(Operation { query, variables })
}
