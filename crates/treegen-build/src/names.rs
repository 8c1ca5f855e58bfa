//! Unique pronounceable name allocation.

use std::collections::HashSet;

use compact_str::CompactString;
use rand::Rng;

use treegen_core::GenConfig;
use treegen_core::name::class_at;

/// Hands out names that are unique for the lifetime of a run.
///
/// Names cycle through consonant, vowel and digit classes (see
/// [`treegen_core::name::NAME_PATTERN`]), so they stay short and readable.
#[derive(Debug, Clone)]
pub struct NameAllocator {
    used: HashSet<CompactString>,
    min_len: usize,
    max_len: usize,
}

impl NameAllocator {
    /// Create an allocator for names with lengths in `[min_len, max_len)`.
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self {
            used: HashSet::new(),
            min_len,
            max_len,
        }
    }

    /// Create an allocator using the config's name length bounds.
    pub fn from_config(config: &GenConfig) -> Self {
        Self::new(config.min_name_length, config.max_name_length)
    }

    /// Allocate a name not handed out before in this run.
    ///
    /// Draws a fresh length and string until an unused one turns up.
    pub fn allocate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> CompactString {
        loop {
            let len = self.draw_length(rng);
            let name = random_name(rng, len);
            if !self.used.contains(&name) {
                self.used.insert(name.clone());
                return name;
            }
        }
    }

    /// Check whether a name has already been allocated.
    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Number of names allocated so far.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Check if no names have been allocated.
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Forget every allocated name.
    pub fn clear(&mut self) {
        self.used.clear();
    }

    fn draw_length<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        if self.max_len > self.min_len {
            rng.gen_range(self.min_len..self.max_len)
        } else {
            self.min_len
        }
    }
}

/// Build a name of exactly `len` characters following the name pattern.
pub fn random_name<R: Rng + ?Sized>(rng: &mut R, len: usize) -> CompactString {
    (0..len)
        .map(|i| {
            let class = class_at(i);
            char::from(class[rng.gen_range(0..class.len())])
        })
        .collect()
}
