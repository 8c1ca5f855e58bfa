//! Directory node types.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Index of a node within a [`DirTree`](crate::DirTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node of every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a new NodeId from an index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single directory in the generated hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirNode {
    /// Directory name (not full path).
    pub name: CompactString,

    /// Depth in the hierarchy; the root is at depth 1.
    pub depth: u32,

    /// Parent directory, `None` for the root.
    pub parent: Option<NodeId>,

    /// Child directories in creation order.
    pub children: Vec<NodeId>,
}

impl DirNode {
    /// Create a root node.
    pub fn root(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            depth: 1,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a child node one level below `parent`.
    pub fn child(name: impl Into<CompactString>, parent: NodeId, parent_depth: u32) -> Self {
        Self {
            name: name.into(),
            depth: parent_depth + 1,
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    /// Check if this node is the root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}
