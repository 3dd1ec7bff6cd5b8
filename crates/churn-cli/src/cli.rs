//! CLI argument definitions.
//!
//! The parser carries no data arguments on purpose: input location, output
//! locations, and split ratios are fixed. Only the logging surface is
//! adjustable.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "churn-prep",
    version,
    about = "Prepare the customer churn dataset for model training",
    long_about = "Prepare the customer churn dataset for model training.\n\n\
                  Reads /opt/ml/processing/input/churn.txt, drops and recodes a fixed\n\
                  set of columns, one-hot encodes categoricals, and writes seeded\n\
                  train/validation/test CSV partitions under /opt/ml/processing/output/."
)]
pub struct Cli {
    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
