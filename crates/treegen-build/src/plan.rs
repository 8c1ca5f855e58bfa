//! File placement over a flattened hierarchy.

use std::path::PathBuf;

use rand::Rng;

use treegen_core::{FileSpec, GenConfig};

use crate::context::GenContext;

/// Lazily chooses a directory, name and size for each file of a run.
///
/// Every path in `dirs` is equally likely to receive each file. Draws are
/// taken per file in a fixed order: directory, name, size.
pub struct FilePlan<'a, R: Rng> {
    ctx: &'a mut GenContext<R>,
    dirs: &'a [PathBuf],
    remaining: u64,
    min_size: u64,
    max_size: u64,
}

impl<'a, R: Rng> FilePlan<'a, R> {
    /// Plan `config.file_count` files over `dirs`.
    ///
    /// Yields nothing when `dirs` is empty.
    pub fn new(ctx: &'a mut GenContext<R>, dirs: &'a [PathBuf], config: &GenConfig) -> Self {
        Self {
            ctx,
            dirs,
            remaining: if dirs.is_empty() { 0 } else { config.file_count },
            min_size: config.min_size,
            max_size: config.max_size,
        }
    }

    /// Count a planned file as written.
    pub fn record_written(&mut self, size: u64) {
        self.ctx.stats.record_file(size);
    }

    fn draw_size(&mut self) -> u64 {
        if self.max_size > self.min_size {
            self.ctx.rng.gen_range(self.min_size..self.max_size)
        } else {
            self.min_size
        }
    }
}

impl<R: Rng> Iterator for FilePlan<'_, R> {
    type Item = FileSpec;

    fn next(&mut self) -> Option<FileSpec> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let dirs = self.dirs;
        let dir = &dirs[self.ctx.rng.gen_range(0..dirs.len())];
        let name = self.ctx.allocate_name();
        let size = self.draw_size();

        Some(FileSpec::new(dir.clone(), name, size))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, usize::try_from(self.remaining).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::TreeBuilder;
    use std::collections::HashSet;

    fn plan(config: &GenConfig) -> Vec<FileSpec> {
        let mut ctx = GenContext::new(config);
        let tree = TreeBuilder::from_config(config).build(&mut ctx, "out");
        let dirs = tree.flatten();
        FilePlan::new(&mut ctx, &dirs, config).collect()
    }

    #[test]
    fn test_plans_every_file() {
        let config = GenConfig::new("out");
        let files = plan(&config);
        assert_eq!(files.len(), 1000);
    }

    #[test]
    fn test_sizes_in_range() {
        let mut config = GenConfig::new("out");
        config.min_size = 50;
        config.max_size = 60;
        for file in plan(&config) {
            assert!((50..60).contains(&file.size));
        }
    }

    #[test]
    fn test_equal_size_bounds() {
        let mut config = GenConfig::new("out");
        config.min_size = 10;
        config.max_size = 10;
        assert!(plan(&config).iter().all(|f| f.size == 10));
    }

    #[test]
    fn test_files_land_in_flattened_dirs() {
        let mut config = GenConfig::new("out");
        config.file_count = 200;
        config.files_per_directory = 4;

        let mut ctx = GenContext::new(&config);
        let tree = TreeBuilder::from_config(&config).build(&mut ctx, "out");
        let dirs = tree.flatten();
        let known: HashSet<_> = dirs.iter().cloned().collect();

        let files: Vec<_> = FilePlan::new(&mut ctx, &dirs, &config).collect();
        assert!(files.iter().all(|f| known.contains(&f.dir)));

        // Directory and file names share one uniqueness set.
        let mut names: HashSet<_> = tree.iter().skip(1).map(|(_, n)| n.name.clone()).collect();
        for file in &files {
            assert!(names.insert(file.name.clone()), "reused name {}", file.name);
        }
        assert_eq!(ctx.names.len(), names.len());
    }

    #[test]
    fn test_empty_dirs_yield_nothing() {
        let config = GenConfig::new("out");
        let mut ctx = GenContext::new(&config);
        let plan = FilePlan::new(&mut ctx, &[], &config);
        assert_eq!(plan.count(), 0);
    }

    #[test]
    fn test_size_hint_exact() {
        let mut config = GenConfig::new("out");
        config.file_count = 7;
        let mut ctx = GenContext::new(&config);
        let dirs = vec![PathBuf::from("out")];
        let mut plan = FilePlan::new(&mut ctx, &dirs, &config);
        assert_eq!(plan.size_hint(), (7, Some(7)));
        plan.next();
        assert_eq!(plan.size_hint(), (6, Some(6)));
    }
}
