//! Core types for treegen.
//!
//! This crate provides the data structures shared by the generator crates:
//! run configuration, errors, the directory hierarchy arena, planned files
//! and run reports.

mod config;
mod error;
mod file;
pub mod name;
mod node;
mod stats;
mod tree;

pub use config::{
    DEFAULT_FILE_COUNT, DEFAULT_FILES_PER_DIRECTORY, DEFAULT_MAX_DEPTH, DEFAULT_MAX_NAME_LENGTH,
    DEFAULT_MAX_SIZE, DEFAULT_MIN_NAME_LENGTH, DEFAULT_MIN_SIZE, DEFAULT_SEED, FillMode,
    GenConfig, GenConfigBuilder, GenConfigBuilderError,
};
pub use error::GenError;
pub use file::FileSpec;
pub use node::{DirNode, NodeId};
pub use stats::{GenReport, GenStats};
pub use tree::DirTree;
