//! CLI argument definitions for the alumni dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use alumni_query::DEFAULT_TOP_N;

#[derive(Parser)]
#[command(
    name = "alumni-dashboard",
    version,
    about = "Alumni System Dashboard - Explore alumni engagement points",
    long_about = "Load a CSV of alumni engagement records and report participant counts,\n\
                  total points per alumnus, and the top alumni by points.\n\n\
                  The CSV must contain Name, Platform and Points columns."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Prefix pretty and compact log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow alumni names and other row values to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter the dataset once and print the dashboard.
    Query(QueryArgs),

    /// List the names and platforms available as filters.
    Options(DataArgs),

    /// Load the dataset once and answer filter queries read from stdin.
    Session(SessionArgs),
}

#[derive(Args)]
pub struct DataArgs {
    /// Path to the alumni CSV file.
    #[arg(value_name = "CSV", default_value = "alumini_data.csv")]
    pub data: PathBuf,
}

#[derive(Args)]
pub struct RankArgs {
    /// Number of alumni to include in the ranking.
    #[arg(long = "top", value_name = "N", default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Output format for results.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Only include these names (repeatable; empty means all).
    #[arg(long = "name", value_name = "NAME")]
    pub names: Vec<String>,

    /// Only include these platforms (repeatable; empty means all).
    #[arg(long = "platform", value_name = "PLATFORM")]
    pub platforms: Vec<String>,

    #[command(flatten)]
    pub rank: RankArgs,
}

#[derive(Args)]
pub struct SessionArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub rank: RankArgs,
}

/// CLI output format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
