//! Full generation runs: hierarchy, placement and file writing.

use std::io::Read;
use std::time::Instant;

use tracing::{debug, info};

use treegen_build::{FilePlan, GenContext, TreeBuilder};
use treegen_core::{GenConfig, GenError, GenReport};

use crate::content::ContentSource;
use crate::writer::FileWriter;

/// Drives generation runs for one configuration.
///
/// Every run starts from a freshly seeded context, so repeated runs
/// produce the same hierarchy, names and sizes.
pub struct Generator<C = ContentSource> {
    config: GenConfig,
    content: C,
    writer: FileWriter,
    ctx: GenContext,
}

impl Generator<ContentSource> {
    /// Create a generator using the content source for the config's fill mode.
    pub fn new(config: GenConfig) -> Result<Self, GenError> {
        let content = ContentSource::from_fill(config.fill);
        Self::with_content(config, content)
    }
}

impl<C: Read> Generator<C> {
    /// Create a generator that takes file bytes from `content`.
    pub fn with_content(config: GenConfig, content: C) -> Result<Self, GenError> {
        config.validate()?;
        let ctx = GenContext::new(&config);
        let writer = FileWriter::new(config.sync);
        Ok(Self {
            config,
            content,
            writer,
            ctx,
        })
    }

    /// The configuration this generator runs with.
    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Run generation once, labelling the report with `iteration`.
    pub fn run_once(&mut self, iteration: u64) -> Result<GenReport, GenError> {
        self.ctx.reset(self.config.seed);

        let root = &self.config.root;
        info!("Storing files in {}", root.display());
        let start = Instant::now();

        // The config validator guarantees a UTF-8 root.
        let root_name = root.to_string_lossy();
        let tree = TreeBuilder::from_config(&self.config).build(&mut self.ctx, &root_name);
        let dirs = tree.flatten();
        debug!(dirs = dirs.len(), depth = tree.max_depth(), "Hierarchy built");

        let mut plan = FilePlan::new(&mut self.ctx, &dirs, &self.config);
        while let Some(spec) = plan.next() {
            let written = self.writer.write(&spec, &mut self.content)?;
            plan.record_written(written);
        }

        let report = GenReport::new(root.clone(), iteration, self.ctx.stats, start.elapsed());
        info!(
            "That took {:?} to write {} files, total size {}, @ {:.3} MiB/s",
            report.elapsed,
            report.stats.files,
            report.stats.total_bytes,
            report.mib_per_second()
        );
        Ok(report)
    }

    /// Run once, or keep regenerating the same tree when the config repeats.
    ///
    /// With repetition on, stops after `max_iterations` runs, or never when
    /// that is `None`. A limit of zero runs nothing, with or without
    /// repetition. `on_report` sees each run's report; an error from it
    /// stops the loop. Returns the number of completed runs.
    pub fn run<F, E>(&mut self, max_iterations: Option<u64>, mut on_report: F) -> Result<u64, E>
    where
        F: FnMut(&GenReport) -> Result<(), E>,
        E: From<GenError>,
    {
        if max_iterations == Some(0) {
            return Ok(0);
        }

        let mut iteration = 0;
        loop {
            iteration += 1;
            let report = self.run_once(iteration)?;
            on_report(&report)?;

            if !self.config.repeat || max_iterations.is_some_and(|max| iteration >= max) {
                return Ok(iteration);
            }
        }
    }
}
