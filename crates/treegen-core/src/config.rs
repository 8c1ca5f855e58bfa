//! Generation configuration types.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::name::{MAX_NAME_BYTES, name_capacity};

/// Default number of files to create.
pub const DEFAULT_FILE_COUNT: u64 = 1000;
/// Default average number of files per directory.
pub const DEFAULT_FILES_PER_DIRECTORY: u64 = 10;
/// Default maximum depth of the directory hierarchy (root = 1).
pub const DEFAULT_MAX_DEPTH: u32 = 10;
/// Default minimum file size in bytes.
pub const DEFAULT_MIN_SIZE: u64 = 0;
/// Default maximum (exclusive) file size in bytes.
pub const DEFAULT_MAX_SIZE: u64 = 100;
/// Default minimum generated name length.
pub const DEFAULT_MIN_NAME_LENGTH: usize = 4;
/// Default maximum (exclusive) generated name length.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 12;
/// Default seed for the structural random generator.
pub const DEFAULT_SEED: u64 = 1;

/// What bytes go into generated files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Bytes from the operating system's secure random source.
    #[default]
    Random,
    /// All bytes are zero.
    Zero,
}

/// Configuration for a generation run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct GenConfig {
    /// Output directory; the root of the generated hierarchy.
    pub root: PathBuf,

    /// Number of files to create.
    #[builder(default = "DEFAULT_FILE_COUNT")]
    #[serde(default = "default_file_count")]
    pub file_count: u64,

    /// Average number of files per directory.
    #[builder(default = "DEFAULT_FILES_PER_DIRECTORY")]
    #[serde(default = "default_files_per_directory")]
    pub files_per_directory: u64,

    /// Maximum depth of the hierarchy, counting the root as depth 1.
    #[builder(default = "DEFAULT_MAX_DEPTH")]
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// Minimum file size in bytes.
    #[builder(default = "DEFAULT_MIN_SIZE")]
    #[serde(default)]
    pub min_size: u64,

    /// Maximum file size in bytes (exclusive unless equal to `min_size`).
    #[builder(default = "DEFAULT_MAX_SIZE")]
    #[serde(default = "default_max_size")]
    pub max_size: u64,

    /// Minimum generated name length.
    #[builder(default = "DEFAULT_MIN_NAME_LENGTH")]
    #[serde(default = "default_min_name_length")]
    pub min_name_length: usize,

    /// Maximum generated name length (exclusive unless equal to `min_name_length`).
    #[builder(default = "DEFAULT_MAX_NAME_LENGTH")]
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,

    /// File content fill mode.
    #[builder(default)]
    #[serde(default)]
    pub fill: FillMode,

    /// Seed for the structural random generator.
    #[builder(default = "DEFAULT_SEED")]
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Sync each file to stable storage before closing it.
    #[builder(default = "false")]
    #[serde(default)]
    pub sync: bool,

    /// Regenerate the same tree forever.
    #[builder(default = "false")]
    #[serde(default)]
    pub repeat: bool,
}

fn default_file_count() -> u64 {
    DEFAULT_FILE_COUNT
}

fn default_files_per_directory() -> u64 {
    DEFAULT_FILES_PER_DIRECTORY
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

fn default_max_size() -> u64 {
    DEFAULT_MAX_SIZE
}

fn default_min_name_length() -> usize {
    DEFAULT_MIN_NAME_LENGTH
}

fn default_max_name_length() -> usize {
    DEFAULT_MAX_NAME_LENGTH
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Numeric limits shared by builder and post-construction validation.
struct Limits {
    file_count: u64,
    files_per_directory: u64,
    min_size: u64,
    max_size: u64,
    min_name_length: usize,
    max_name_length: usize,
}

impl Limits {
    fn check(&self) -> Result<(), String> {
        if self.files_per_directory == 0 {
            return Err("files per directory must be at least 1".to_string());
        }
        if self.min_size > self.max_size {
            return Err(format!(
                "minimum size {} is greater than maximum size {}",
                self.min_size, self.max_size
            ));
        }
        if self.min_name_length == 0 {
            return Err("minimum name length must be at least 1".to_string());
        }
        if self.min_name_length > self.max_name_length {
            return Err(format!(
                "minimum name length {} is greater than maximum name length {}",
                self.min_name_length, self.max_name_length
            ));
        }
        let longest = if self.max_name_length > self.min_name_length {
            self.max_name_length - 1
        } else {
            self.min_name_length
        };
        if longest > MAX_NAME_BYTES {
            return Err(format!(
                "names of length {longest} exceed the {MAX_NAME_BYTES} byte limit"
            ));
        }

        // Name allocation retries until it finds an unused name, so the
        // name space must be able to hold every directory and file.
        let needed = names_needed(self.file_count, self.files_per_directory);
        let capacity = name_capacity(self.min_name_length, self.max_name_length);
        if u128::from(needed) > capacity {
            return Err(format!(
                "{needed} unique names needed but lengths {}..{} only allow {capacity}",
                self.min_name_length, self.max_name_length
            ));
        }
        Ok(())
    }
}

/// The root's name becomes the first component of every generated path.
fn check_root(root: &Path) -> Result<(), String> {
    if root.as_os_str().is_empty() {
        return Err("Output directory cannot be empty".to_string());
    }
    if root.to_str().is_none() {
        return Err(format!("Output directory is not valid UTF-8: {}", root.display()));
    }
    Ok(())
}

fn names_needed(file_count: u64, files_per_directory: u64) -> u64 {
    file_count.saturating_add(file_count / files_per_directory.max(1))
}

impl GenConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) => check_root(root)?,
            None => return Err("Output directory is required".to_string()),
        }

        Limits {
            file_count: self.file_count.unwrap_or(DEFAULT_FILE_COUNT),
            files_per_directory: self
                .files_per_directory
                .unwrap_or(DEFAULT_FILES_PER_DIRECTORY),
            min_size: self.min_size.unwrap_or(DEFAULT_MIN_SIZE),
            max_size: self.max_size.unwrap_or(DEFAULT_MAX_SIZE),
            min_name_length: self.min_name_length.unwrap_or(DEFAULT_MIN_NAME_LENGTH),
            max_name_length: self.max_name_length.unwrap_or(DEFAULT_MAX_NAME_LENGTH),
        }
        .check()
    }
}

impl GenConfig {
    /// Create a new config builder.
    pub fn builder() -> GenConfigBuilder {
        GenConfigBuilder::default()
    }

    /// Create a config with default parameters for an output directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_count: DEFAULT_FILE_COUNT,
            files_per_directory: DEFAULT_FILES_PER_DIRECTORY,
            max_depth: DEFAULT_MAX_DEPTH,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            fill: FillMode::Random,
            seed: DEFAULT_SEED,
            sync: false,
            repeat: false,
        }
    }

    /// Validate a config that was built or deserialized without the builder.
    pub fn validate(&self) -> Result<(), GenError> {
        check_root(&self.root).map_err(GenError::invalid_config)?;
        Limits {
            file_count: self.file_count,
            files_per_directory: self.files_per_directory,
            min_size: self.min_size,
            max_size: self.max_size,
            min_name_length: self.min_name_length,
            max_name_length: self.max_name_length,
        }
        .check()
        .map_err(GenError::invalid_config)
    }

    /// Number of directories to create below the root.
    pub fn target_directories(&self) -> u64 {
        self.file_count / self.files_per_directory.max(1)
    }

    /// Number of unique names a run allocates (directories plus files).
    pub fn names_needed(&self) -> u64 {
        names_needed(self.file_count, self.files_per_directory)
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
