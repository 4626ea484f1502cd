//! CLI argument definitions for the listing preparation tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vlp",
    version,
    about = "Vehicle listing preparation - clean raw listings and build train/test splits",
    long_about = "Normalize raw vehicle listing CSV data and produce a deterministic\n\
                  train/test partition for downstream model training."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a raw listing CSV and write cleaned_data.csv.
    Clean(CleanArgs),

    /// Split a cleaned CSV into train.csv and test.csv.
    Split(SplitArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the raw listing CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for cleaned_data.csv.
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = "data/cleaned_ds_ready"
    )]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct SplitArgs {
    /// Path to the cleaned listing CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for train.csv and test.csv.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "data/interim")]
    pub output_dir: PathBuf,

    /// Path to the YAML parameters file.
    #[arg(long = "params", value_name = "PATH", default_value = "params.yaml")]
    pub params: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
