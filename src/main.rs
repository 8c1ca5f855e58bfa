//! treegen - deterministic random directory trees for storage benchmarks.
//!
//! Usage:
//!   treegen [OPTIONS] <DIRECTORY>    Fill DIRECTORY with a random tree
//!   treegen --loop <DIRECTORY>       Regenerate the same tree forever
//!   treegen --help                   Show help

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use treegen_core::{
    DEFAULT_FILE_COUNT, DEFAULT_FILES_PER_DIRECTORY, DEFAULT_MAX_DEPTH, DEFAULT_MAX_NAME_LENGTH,
    DEFAULT_MAX_SIZE, DEFAULT_MIN_NAME_LENGTH, DEFAULT_MIN_SIZE, DEFAULT_SEED, FillMode,
    GenConfig, GenError, GenReport,
};
use treegen_write::Generator;

#[derive(Parser)]
#[command(
    name = "treegen",
    version,
    about = "Make a random directory structure full of random files",
    long_about = "treegen makes a random directory structure with random files in \
                  <DIRECTORY>. The options control exactly which files get made.\n\n\
                  File names and sizes are identical every time the command is run \
                  with the same parameters. Use --seed to change what is created."
)]
struct Cli {
    /// Directory to store the generated tree in
    directory: PathBuf,

    /// Number of files to create
    #[arg(short = 'n', long = "files", default_value_t = DEFAULT_FILE_COUNT)]
    files: u64,

    /// Fill files with zeroes instead of random data
    #[arg(short = 'z', long)]
    zeroes: bool,

    /// Be more verbose
    #[arg(short, long)]
    verbose: bool,

    /// Fsync each file
    #[arg(long)]
    sync: bool,

    /// Loop forever, regenerating the same tree
    #[arg(long = "loop")]
    repeat: bool,

    /// Average number of files per directory
    #[arg(long, default_value_t = DEFAULT_FILES_PER_DIRECTORY)]
    files_per_directory: u64,

    /// Maximum depth of the directory hierarchy (the output directory is depth 1)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Minimum size of files to create, in bytes
    #[arg(long, default_value_t = DEFAULT_MIN_SIZE)]
    min_size: u64,

    /// Maximum size of files to create, in bytes (exclusive)
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: u64,

    /// Minimum length of generated names
    #[arg(long, default_value_t = DEFAULT_MIN_NAME_LENGTH)]
    min_name_length: usize,

    /// Maximum length of generated names (exclusive)
    #[arg(long, default_value_t = DEFAULT_MAX_NAME_LENGTH)]
    max_name_length: usize,

    /// Seed for the random number generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Summary output format
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Build the generation config from the parsed flags.
    fn to_config(&self) -> Result<GenConfig> {
        let fill = if self.zeroes {
            FillMode::Zero
        } else {
            FillMode::Random
        };

        GenConfig::builder()
            .root(self.directory.clone())
            .file_count(self.files)
            .files_per_directory(self.files_per_directory)
            .max_depth(self.max_depth)
            .min_size(self.min_size)
            .max_size(self.max_size)
            .min_name_length(self.min_name_length)
            .max_name_length(self.max_name_length)
            .fill(fill)
            .seed(self.seed)
            .sync(self.sync)
            .repeat(self.repeat)
            .build()
            .map_err(GenError::from)
            .context("Invalid arguments")
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.to_config()?;
    let format = cli.format;

    let mut generator = Generator::new(config)?;
    generator.run(None, |report| print_report(report, format))?;

    Ok(())
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Print the summary of one run.
fn print_report(report: &GenReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "─".repeat(60));
            println!(" {} (run {})", report.root.display(), report.iteration);
            println!(
                " {} files, {} directories, {}",
                report.stats.files,
                report.stats.directories,
                format_size(report.stats.total_bytes)
            );
            println!(
                " Written in {:.3}s @ {:.3} MiB/s",
                report.elapsed.as_secs_f64(),
                report.mib_per_second()
            );
            println!("{}", "─".repeat(60));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string(report).context("Failed to encode report")?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
