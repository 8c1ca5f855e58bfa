//! Run counters and reports.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Running totals for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenStats {
    /// Directories created below the root.
    pub directories: u64,
    /// Files written.
    pub files: u64,
    /// Bytes written across all files.
    pub total_bytes: u64,
}

impl GenStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directory added to the hierarchy.
    pub fn record_dir(&mut self) {
        self.directories += 1;
    }

    /// Record a written file.
    pub fn record_file(&mut self, size: u64) {
        self.files += 1;
        self.total_bytes += size;
    }

    /// Zero all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Summary of a completed generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenReport {
    /// Output directory the tree was written under.
    pub root: PathBuf,
    /// Loop iteration this report belongs to, starting at 1.
    pub iteration: u64,
    /// Final counters.
    pub stats: GenStats,
    /// Wall-clock time for the run.
    pub elapsed: Duration,
}

impl GenReport {
    /// Create a new report.
    pub fn new(root: impl Into<PathBuf>, iteration: u64, stats: GenStats, elapsed: Duration) -> Self {
        Self {
            root: root.into(),
            iteration,
            stats,
            elapsed,
        }
    }

    /// Write throughput in bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.stats.total_bytes as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Write throughput in MiB per second.
    pub fn mib_per_second(&self) -> f64 {
        self.bytes_per_second() / 1024.0 / 1024.0
    }
}
