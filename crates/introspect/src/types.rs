//! Type definitions for flattened introspection results.

use serde::{Deserialize, Serialize};

use crate::cursor::ResultCursor;

/// Length/capacity observed on a container-like value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerStats {
    pub length: u64,
    pub capacity: u64,
}

/// Whether a flag/optional-like value was populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsSetStats {
    pub is_set: bool,
}

/// One entry of a flattened introspection tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Field/member name.
    pub name: String,
    /// Type labels from the root down to and including this node.
    pub type_path: Vec<String>,
    /// Display names for this node's type.
    #[serde(default)]
    pub type_names: Vec<String>,
    pub static_size: u64,
    pub exclusive_size: u64,
    /// Observed address, for pointer-like values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_stats: Option<ContainerStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_set_stats: Option<IsSetStats>,
}

impl Node {
    /// Create a node with no pointer, container or is-set stats.
    pub fn new<P, N>(
        name: impl Into<String>,
        type_path: P,
        type_names: N,
        static_size: u64,
        exclusive_size: u64,
    ) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Node {
            name: name.into(),
            type_path: type_path.into_iter().map(Into::into).collect(),
            type_names: type_names.into_iter().map(Into::into).collect(),
            static_size,
            exclusive_size,
            pointer: None,
            container_stats: None,
            is_set_stats: None,
        }
    }

    pub fn with_pointer(mut self, pointer: u64) -> Self {
        self.pointer = Some(pointer);
        self
    }

    pub fn with_container_stats(mut self, length: u64, capacity: u64) -> Self {
        self.container_stats = Some(ContainerStats { length, capacity });
        self
    }

    pub fn with_is_set(mut self, is_set: bool) -> Self {
        self.is_set_stats = Some(IsSetStats { is_set });
        self
    }

    /// Nesting level in the reconstructed tree (1 = top level).
    pub fn depth(&self) -> usize {
        self.type_path.len()
    }
}

/// A pre-order flattened introspection tree.
///
/// Parent/child relationships are encoded only through `type_path` length:
/// a node directly followed by a node one level deeper owns that node as its
/// first child.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntrospectionResult {
    nodes: Vec<Node>,
}

impl IntrospectionResult {
    pub fn new(nodes: Vec<Node>) -> Self {
        IntrospectionResult { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// A forward cursor positioned at the first node.
    pub fn cursor(&self) -> ResultCursor<'_> {
        ResultCursor::new(&self.nodes)
    }

    /// Deepest `type_path` length in the sequence (0 when empty).
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(Node::depth).max().unwrap_or(0)
    }
}

impl From<Vec<Node>> for IntrospectionResult {
    fn from(nodes: Vec<Node>) -> Self {
        IntrospectionResult::new(nodes)
    }
}

impl<'a> IntoIterator for &'a IntrospectionResult {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
