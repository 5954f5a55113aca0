//! Forward-only cursor over a flattened result.

use crate::types::Node;

/// Single-pass position over a node sequence.
///
/// The exporter threads one cursor through its recursive calls by `&mut`;
/// each call leaves it one past the subtree it consumed.
#[derive(Debug)]
pub struct ResultCursor<'a> {
    nodes: &'a [Node],
    position: usize,
}

impl<'a> ResultCursor<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        ResultCursor { nodes, position: 0 }
    }

    /// The node under the cursor, or `None` at end.
    pub fn current(&self) -> Option<&'a Node> {
        self.nodes.get(self.position)
    }

    /// Depth of the node under the cursor, or `None` at end.
    pub fn current_depth(&self) -> Option<usize> {
        self.current().map(Node::depth)
    }

    /// Move one node forward. No-op at end.
    pub fn advance(&mut self) {
        if self.position < self.nodes.len() {
            self.position += 1;
        }
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.nodes.len()
    }
}
