//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "namecheck",
    version,
    about = "Audit project names in reports against the official master list",
    long_about = "Audit project names written in business documents against the \
                  official master list.\n\n\
                  Finds canonical names, bare names with a missing or wrong qualifier, \
                  incomplete names and typos, and writes a mismatch report."
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

    /// Log output format.
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
    /// Review documents and folders and report name mismatches.
    Review(ReviewArgs),

    /// Classify names given on the command line.
    Check(CheckArgs),

    /// Print or export the active master list.
    Master(MasterArgs),
}

/// Options shared by every command that needs the master list.
#[derive(Parser)]
pub struct MatchArgs {
    /// Master list file (.csv first column, or one name per line).
    #[arg(long = "master", value_name = "PATH")]
    pub master: Option<PathBuf>,

    /// TOML file with `master` and `[matching]` settings.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum similarity for a typo verdict (0.0 to 1.0).
    #[arg(long = "similarity-threshold", value_name = "RATIO")]
    pub similarity_threshold: Option<f64>,

    /// Fragments longer than this skip the fuzzy fallback.
    #[arg(long = "fallback-max-chars", value_name = "N")]
    pub fallback_max_chars: Option<usize>,
}

#[derive(Parser)]
pub struct ReviewArgs {
    /// Documents or folders to review. Folders are searched recursively.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub matching: MatchArgs,

    /// Write the mismatch report to this file.
    #[arg(long = "report", short = 'o', value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Report format (default: from the report file extension, else csv).
    #[arg(long = "format", value_enum)]
    pub format: Option<ReportFormatArg>,

    /// Hide the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Exit with status 0 even when mismatches or errors are found.
    #[arg(long = "no-fail")]
    pub no_fail: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Names to classify.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub matching: MatchArgs,
}

#[derive(Parser)]
pub struct MasterArgs {
    /// Master list file (default: the embedded list).
    #[arg(long = "master", value_name = "PATH")]
    pub master: Option<PathBuf>,

    /// Export the list as CSV instead of printing a table.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Csv,
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
