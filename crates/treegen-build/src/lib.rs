//! Seeded hierarchy construction and file placement for treegen.
//!
//! This crate turns a [`GenConfig`] into a reproducible directory hierarchy
//! and a stream of planned files. Nothing here touches the filesystem.
//!
//! # Overview
//!
//! - **Names** come from [`NameAllocator`], unique within a run
//! - **Hierarchy** is grown by [`TreeBuilder`] with random branching
//! - **Placement** is done by [`FilePlan`], uniform over flattened paths
//!
//! All three draw from the single generator held in [`GenContext`], so the
//! same seed always yields the same tree and the same files.
//!
//! # Example
//!
//! ```rust
//! use treegen_build::{FilePlan, GenConfig, GenContext, TreeBuilder};
//!
//! let config = GenConfig::new("fixtures");
//! let mut ctx = GenContext::new(&config);
//!
//! let tree = TreeBuilder::from_config(&config).build(&mut ctx, "fixtures");
//! let dirs = tree.flatten();
//!
//! for file in FilePlan::new(&mut ctx, &dirs, &config).take(3) {
//!     println!("{} ({} bytes)", file.path().display(), file.size);
//! }
//! ```

mod context;
mod hierarchy;
mod names;
mod plan;

pub use context::GenContext;
pub use hierarchy::TreeBuilder;
pub use names::{NameAllocator, random_name};
pub use plan::FilePlan;

// Re-export core types for convenience
pub use treegen_core::{DirNode, DirTree, FileSpec, GenConfig, GenStats, NodeId};
