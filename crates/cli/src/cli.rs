//! Process arguments.

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "homestock",
    version,
    about = "Keep track of your personal belongings and their locations",
    long_about = "Interactive, in-memory personal inventory.\n\n\
                  Nothing is saved: the inventory lives for the duration of the session."
)]
pub struct Cli {
    /// Start the session with a few example belongings.
    #[arg(long, env = "HOMESTOCK_SAMPLE")]
    pub sample: bool,

    /// Initial search term for the item list.
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,

    /// Explicit log level (overrides RUST_LOG).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format. Logs are written to stderr.
    #[arg(long = "log-format", value_enum, default_value = "compact")]
    pub log_format: LogFormatArg,
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
