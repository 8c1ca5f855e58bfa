//! File materialization for treegen.
//!
//! This crate writes the files planned by `treegen-build` to disk and
//! drives whole generation runs, including the repeat loop.
//!
//! File content comes from a [`Read`](std::io::Read) source kept apart from
//! the seeded structural generator: [`ContentSource`] picks secure random
//! bytes or zeroes, and [`Generator::with_content`] accepts any reader.
//!
//! ```rust,no_run
//! use treegen_write::{GenConfig, Generator};
//!
//! let config = GenConfig::new("/tmp/fixtures");
//! let mut generator = Generator::new(config).unwrap();
//! let report = generator.run_once(1).unwrap();
//!
//! println!("{} files, {} bytes", report.stats.files, report.stats.total_bytes);
//! ```

mod content;
mod generator;
mod writer;

pub use content::{ContentSource, OsRandom};
pub use generator::Generator;
pub use writer::FileWriter;

// Re-export core types
pub use treegen_core::{FillMode, GenConfig, GenError, GenReport, GenStats};
