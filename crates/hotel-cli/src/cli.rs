//! CLI argument definitions for the hotel offers ETL.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hotel-etl",
    version,
    about = "Hotel offers ETL - split scraped listings into processed and rejected Parquet",
    long_about = "Read staged CSV listings from an ingestion directory, enrich them, and \
                  write valid and invalid rows as date-partitioned Parquet objects.\n\n\
                  Objects live in a local directory tree: one subdirectory per bucket."
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
    /// Handle an object-created notification read from a JSON file.
    Event(EventArgs),

    /// Process one ingestion directory by prefix.
    Batch(BatchArgs),

    /// List the rules that route rows to the rejected set.
    Rules,
}

#[derive(Parser)]
pub struct EventArgs {
    /// Notification JSON with a `Records` array.
    #[arg(value_name = "EVENT_JSON")]
    pub event_json: PathBuf,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Bucket holding the ingestion directory.
    #[arg(value_name = "BUCKET")]
    pub bucket: String,

    /// Ingestion directory prefix, e.g. raw/ingestion_20260216_093000/.
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Object store location and pipeline settings shared by both run commands.
#[derive(Args)]
pub struct StoreArgs {
    /// Root directory of the object store.
    #[arg(long = "store-root", value_name = "DIR", default_value = ".")]
    pub store_root: PathBuf,

    /// Compute payloads and keys without uploading.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// JSON settings file.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prefix of staged CSV objects.
    #[arg(long = "raw-prefix", value_name = "PREFIX")]
    pub raw_prefix: Option<String>,

    /// Prefix for the valid payload.
    #[arg(long = "processed-prefix", value_name = "PREFIX")]
    pub processed_prefix: Option<String>,

    /// Prefix for the invalid payload.
    #[arg(long = "rejected-prefix", value_name = "PREFIX")]
    pub rejected_prefix: Option<String>,

    /// City written to every row.
    #[arg(long = "city")]
    pub city: Option<String>,
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
