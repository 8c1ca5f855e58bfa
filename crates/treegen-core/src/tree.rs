//! Directory hierarchy container and flattening.

use std::path::PathBuf;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::node::{DirNode, NodeId};

/// Arena-backed directory hierarchy.
///
/// Nodes own nothing; parents list their children by [`NodeId`] and
/// children point back to their parent the same way. The root is always
/// at [`NodeId::ROOT`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirTree {
    nodes: Vec<DirNode>,
}

impl DirTree {
    /// Create a tree holding only a root directory.
    pub fn new(root_name: impl Into<CompactString>) -> Self {
        Self {
            nodes: vec![DirNode::root(root_name)],
        }
    }

    /// Get the root node.
    pub fn root(&self) -> &DirNode {
        &self.nodes[NodeId::ROOT.index()]
    }

    /// Get a node by id.
    pub fn get(&self, id: NodeId) -> Option<&DirNode> {
        self.nodes.get(id.index())
    }

    /// Append a new child directory under `parent`, returning its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<CompactString>) -> NodeId {
        let parent_depth = self.nodes[parent.index()].depth;
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(DirNode::child(name, parent, parent_depth));
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its root, so it is never empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of directories below the root.
    pub fn dir_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Deepest node depth (1 for a root-only tree).
    pub fn max_depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(1)
    }

    /// Iterate over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &DirNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(i), node))
    }

    /// Full path of a node, built from its parent chain.
    pub fn path_of(&self, id: NodeId) -> Option<PathBuf> {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id)?;
            names.push(node.name.as_str());
            current = node.parent;
        }
        Some(names.iter().rev().collect())
    }

    /// Flatten the hierarchy into one path per node.
    ///
    /// Paths are produced in pre-order (a node before its children, children
    /// in creation order), starting with the root's own name.
    pub fn flatten(&self) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(NodeId::ROOT, PathBuf::from(self.root().name.as_str()))];

        while let Some((id, path)) = stack.pop() {
            let node = &self.nodes[id.index()];
            for &child in node.children.iter().rev() {
                let child_path = path.join(self.nodes[child.index()].name.as_str());
                stack.push((child, child_path));
            }
            paths.push(path);
        }

        paths
    }
}
