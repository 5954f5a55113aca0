//! Re-flattening of exported JSON documents.
//!
//! Walks a nested document pre-order and rebuilds the flat node sequence it
//! was exported from. Each object's nesting level has to agree with the
//! length of its own `typePath`.

use serde::Deserialize;

use crate::error::{ExportError, ExportResult};
use crate::types::{ContainerStats, IntrospectionResult, IsSetStats, Node};

/// One object of an exported document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportedNode {
    name: String,
    type_path: Vec<String>,
    #[serde(default)]
    type_names: Vec<String>,
    static_size: u64,
    exclusive_size: u64,
    #[serde(default)]
    pointer: Option<u64>,
    #[serde(default)]
    length: Option<u64>,
    #[serde(default)]
    capacity: Option<u64>,
    #[serde(default, rename = "is_set")]
    is_set: Option<bool>,
    #[serde(default)]
    members: Vec<ExportedNode>,
}

/// Parse an exported document and flatten it back into a result.
pub fn flatten_document(json_str: &str) -> ExportResult<IntrospectionResult> {
    let roots: Vec<ExportedNode> =
        serde_json::from_str(json_str).map_err(|e| ExportError::JsonParse(format!("{}", e)))?;

    let mut nodes = Vec::new();
    flatten_group(roots, 1, &mut nodes)?;
    Ok(IntrospectionResult::new(nodes))
}

fn flatten_group(group: Vec<ExportedNode>, depth: usize, out: &mut Vec<Node>) -> ExportResult<()> {
    for exported in group {
        let index = out.len();
        if exported.type_path.len() != depth {
            return Err(ExportError::invalid_input(
                index,
                format!(
                    "'{}' is nested at depth {} but its typePath has {} entries",
                    exported.name,
                    depth,
                    exported.type_path.len()
                ),
            ));
        }

        let container_stats = match (exported.length, exported.capacity) {
            (Some(length), Some(capacity)) => Some(ContainerStats { length, capacity }),
            (None, None) => None,
            _ => {
                return Err(ExportError::invalid_input(
                    index,
                    format!("'{}' has only one of length/capacity", exported.name),
                ))
            }
        };

        out.push(Node {
            name: exported.name,
            type_path: exported.type_path,
            type_names: exported.type_names,
            static_size: exported.static_size,
            exclusive_size: exported.exclusive_size,
            pointer: exported.pointer,
            container_stats,
            is_set_stats: exported.is_set.map(|is_set| IsSetStats { is_set }),
        });

        flatten_group(exported.members, depth + 1, out)?;
    }
    Ok(())
}
