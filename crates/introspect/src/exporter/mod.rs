//! Exporters turning a flattened result into a nested document.
//!
//! Only JSON is implemented. Every export validates the whole sequence first,
//! so malformed input is rejected before a single byte reaches the sink.

pub mod json;

pub use json::JsonExporter;

use crate::error::{ExportError, ExportResult};
use crate::types::IntrospectionResult;

/// Default nesting limit; bounds the exporter's recursion.
///
/// Each tree level costs two JSON nesting levels (the object and its
/// `members` array) and serde_json refuses documents nested 128 deep, so a
/// depth-63 leaf is the deepest node whose document can still be parsed back.
pub const DEFAULT_MAX_DEPTH: usize = 63;

/// Export configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Indented, multi-line layout instead of compact.
    pub pretty: bool,
    /// Deepest `type_path` accepted.
    pub max_depth: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            pretty: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ExportOptions {
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Render `result` as a JSON document string.
pub fn serialize(result: &IntrospectionResult, pretty: bool) -> ExportResult<String> {
    serialize_with(result, ExportOptions::default().pretty(pretty))
}

/// Like [`serialize`], with full options.
pub fn serialize_with(result: &IntrospectionResult, options: ExportOptions) -> ExportResult<String> {
    let mut exporter = JsonExporter::new(Vec::new(), options);
    exporter.export(result)?;
    String::from_utf8(exporter.into_inner())
        .map_err(|_| ExportError::Io("JSON output is not valid UTF-8".into()))
}

/// Check the depth invariant of the whole sequence.
///
/// The first node must sit at depth 1, no node may have an empty
/// `type_path`, depth may grow by at most one between neighbours, and no
/// node may be deeper than `max_depth`. Returns the deepest depth seen.
pub fn validate(result: &IntrospectionResult, max_depth: usize) -> ExportResult<usize> {
    let mut previous = 0;
    let mut deepest = 0;

    for (index, node) in result.iter().enumerate() {
        let depth = node.depth();
        if depth == 0 {
            return Err(ExportError::invalid_input(
                index,
                format!("node '{}' has an empty type_path", node.name),
            ));
        }
        if index == 0 && depth != 1 {
            return Err(ExportError::invalid_input(
                index,
                format!("first node must be at depth 1, found depth {}", depth),
            ));
        }
        if depth > previous + 1 {
            return Err(ExportError::invalid_input(
                index,
                format!("depth jumps from {} to {}", previous, depth),
            ));
        }
        if depth > max_depth {
            return Err(ExportError::invalid_input(
                index,
                format!("depth {} exceeds the limit of {}", depth, max_depth),
            ));
        }
        previous = depth;
        deepest = deepest.max(depth);
    }

    Ok(deepest)
}
