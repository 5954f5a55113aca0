//! Flattened introspection results and their nested JSON export.
//!
//! An introspection engine describes the data it sampled as a pre-order list
//! of nodes whose nesting is encoded only by the length of each node's
//! `type_path`. This crate provides:
//!
//! - The node model (`Node`, `IntrospectionResult`) and a forward `ResultCursor`
//! - Loading of flattened results from `.json` and `.json.xz` files
//! - `JsonExporter` for rebuilding the tree as compact or pretty JSON
//! - `flatten_document` for turning an exported document back into nodes
//! - `compare_json` for matching partial expected documents against output
//!
//! # Example
//!
//! ```rust,ignore
//! use introspect::{parse_result_file, serialize};
//!
//! let result = parse_result_file("result.json.xz")?;
//! let json = serialize(&result, true)?;
//! ```

pub mod compare;
pub mod cursor;
pub mod document;
pub mod error;
pub mod exporter;
pub mod parser;
pub mod types;

// Re-export key types at crate root.
pub use compare::{compare_json, Mismatch};
pub use cursor::ResultCursor;
pub use document::flatten_document;
pub use error::{ExportError, ExportResult};
pub use exporter::{serialize, serialize_with, validate, ExportOptions, JsonExporter};
pub use parser::{parse_result_bytes, parse_result_file, parse_result_str};
pub use types::{ContainerStats, IntrospectionResult, IsSetStats, Node};
