//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Corpus Splitter - randomized train/test corpus partitioning
#[derive(Parser, Debug)]
#[command(
    name = "corpus-splitter",
    author,
    version,
    about = "Randomized train/test corpus partitioning",
    long_about = "Partitions a newline-delimited text corpus into disjoint training and \n\
                  testing sets by uniform random permutation at a fixed fractional \n\
                  boundary, writing each set to its own file."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "CORPUS_SPLITTER_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "CORPUS_SPLITTER_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Partition the corpus into training and testing files
    Split(SplitArgs),

    /// Validate a plan file without running
    Validate(ValidateArgs),

    /// Display plan information
    Info(InfoArgs),
}

/// Arguments for the `split` command
#[derive(Parser, Debug, Clone)]
pub struct SplitArgs {
    /// Path to plan file (TOML or JSON)
    #[arg(
        short,
        long,
        default_value = "split.toml",
        env = "CORPUS_SPLITTER_CONFIG"
    )]
    pub config: PathBuf,

    /// Override source corpus path from the plan
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Override training output path from the plan
    #[arg(long)]
    pub training: Option<PathBuf>,

    /// Override testing output path from the plan
    #[arg(long)]
    pub testing: Option<PathBuf>,

    /// Override training fraction from the plan (must be in (0, 1))
    #[arg(long, env = "CORPUS_SPLITTER_RATIO")]
    pub ratio: Option<f64>,

    /// Override shuffle seed from the plan (fixes the permutation)
    #[arg(long, env = "CORPUS_SPLITTER_SEED")]
    pub seed: Option<u64>,

    /// Run the split without writing output files (subsets go to log sinks)
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to plan file to validate
    #[arg(short, long, default_value = "split.toml")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to plan file
    #[arg(short, long, default_value = "split.toml")]
    pub config: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Read the source corpus and show entry counts and projected split sizes
    #[arg(long)]
    pub entries: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}
