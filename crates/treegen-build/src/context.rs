//! Per-run generator state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use treegen_core::{GenConfig, GenStats};

use crate::names::NameAllocator;

/// Mutable state shared by every step of a generation run.
///
/// All structural decisions (names, branching, file placement, sizes) draw
/// from `rng`, so a run is reproducible from the seed as long as the steps
/// consume draws in the same order.
#[derive(Debug, Clone)]
pub struct GenContext<R = StdRng> {
    /// Structural random generator.
    pub rng: R,
    /// Uniqueness set for directory and file names.
    pub names: NameAllocator,
    /// Running totals.
    pub stats: GenStats,
}

impl GenContext<StdRng> {
    /// Create a context seeded from the config.
    pub fn new(config: &GenConfig) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(config.seed))
    }

    /// Reseed the generator and drop all names and counters.
    pub fn reset(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.names.clear();
        self.stats.reset();
    }
}

impl<R: Rng> GenContext<R> {
    /// Create a context around an existing random generator.
    pub fn with_rng(config: &GenConfig, rng: R) -> Self {
        Self {
            rng,
            names: NameAllocator::from_config(config),
            stats: GenStats::new(),
        }
    }

    /// Allocate a unique name from the shared generator.
    pub fn allocate_name(&mut self) -> compact_str::CompactString {
        self.names.allocate(&mut self.rng)
    }
}
