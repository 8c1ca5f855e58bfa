//! Randomized directory hierarchy construction.

use rand::Rng;
use tracing::debug;

use treegen_core::{DirTree, GenConfig, NodeId};

use crate::context::GenContext;

/// Number of equally likely outcomes drawn after each new directory.
const BRANCH_OUTCOMES: u32 = 4;

/// What happens after a directory is added under the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    /// Build subdirectories inside the new directory.
    Descend,
    /// Stop adding siblings at this level.
    Stop,
    /// Add another sibling.
    Continue,
}

impl Branch {
    fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..BRANCH_OUTCOMES) {
            0 => Branch::Descend,
            1 => Branch::Stop,
            _ => Branch::Continue,
        }
    }
}

/// Builds a random but reproducible directory hierarchy.
///
/// The tree grows until it holds `target` directories below the root or no
/// node can take children without exceeding `max_depth`.
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder {
    target: u64,
    max_depth: u32,
}

impl TreeBuilder {
    /// Create a builder for `target` directories at most `max_depth` deep.
    pub fn new(target: u64, max_depth: u32) -> Self {
        Self { target, max_depth }
    }

    /// Create a builder from the config's file count and depth limits.
    pub fn from_config(config: &GenConfig) -> Self {
        Self::new(config.target_directories(), config.max_depth)
    }

    /// Number of directories the builder aims for.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Build the hierarchy under a root directory named `root_name`.
    pub fn build<R: Rng>(&self, ctx: &mut GenContext<R>, root_name: &str) -> DirTree {
        let mut tree = DirTree::new(root_name);
        debug!(target_dirs = self.target, max_depth = self.max_depth, "Creating directories");

        let root_depth = tree.root().depth;
        if !self.can_nest(root_depth) {
            return tree;
        }

        // A single pass may stop early, so keep growing from the root.
        while ctx.stats.directories < self.target {
            self.grow(ctx, &mut tree, NodeId::ROOT, root_depth);
        }

        tree
    }

    /// Whether a node at `depth` may receive children.
    fn can_nest(&self, depth: u32) -> bool {
        depth < self.max_depth
    }

    fn grow<R: Rng>(&self, ctx: &mut GenContext<R>, tree: &mut DirTree, node: NodeId, depth: u32) {
        while ctx.stats.directories < self.target {
            let name = ctx.allocate_name();
            let child = tree.add_child(node, name);
            ctx.stats.record_dir();

            match Branch::draw(&mut ctx.rng) {
                Branch::Descend => {
                    if self.can_nest(depth + 1) {
                        self.grow(ctx, tree, child, depth + 1);
                    }
                }
                Branch::Stop => return,
                Branch::Continue => {}
            }
        }
    }
}
