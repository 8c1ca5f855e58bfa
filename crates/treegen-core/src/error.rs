//! Error types for generation runs.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::GenConfigBuilderError;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenError {
    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A directory could not be created.
    #[error("Failed to make directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be created.
    #[error("Failed to open file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying content into a file failed.
    #[error("Failed to write {size} bytes to file {path}: {source}")]
    Write {
        path: PathBuf,
        size: u64,
        #[source]
        source: std::io::Error,
    },

    /// The content source ran dry before the file reached its size.
    #[error("Short write to file {path}: wrote {written} of {expected} bytes")]
    ShortWrite {
        path: PathBuf,
        expected: u64,
        written: u64,
    },

    /// Syncing a file to stable storage failed.
    #[error("Failed to sync file {path}: {source}")]
    Sync {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Flushing buffered data on close failed.
    #[error("Failed to close file {path}: {source}")]
    Close {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Path the failed filesystem operation was working on, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::InvalidConfig { .. } => None,
            Self::CreateDirectory { path, .. }
            | Self::CreateFile { path, .. }
            | Self::Write { path, .. }
            | Self::ShortWrite { path, .. }
            | Self::Sync { path, .. }
            | Self::Close { path, .. } => Some(path),
        }
    }
}

impl From<GenConfigBuilderError> for GenError {
    fn from(err: GenConfigBuilderError) -> Self {
        Self::invalid_config(err.to_string())
    }
}
