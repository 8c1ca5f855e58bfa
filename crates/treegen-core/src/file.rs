//! Planned file type.

use std::path::PathBuf;

use compact_str::CompactString;

/// A file chosen for materialization: where it goes, what it is called
/// and how large it is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileSpec {
    /// Directory the file is placed in.
    pub dir: PathBuf,
    /// File name (not full path).
    pub name: CompactString,
    /// Size in bytes.
    pub size: u64,
}

impl FileSpec {
    /// Create a new file spec.
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<CompactString>, size: u64) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
            size,
        }
    }

    /// Full path of the file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(self.name.as_str())
    }
}
