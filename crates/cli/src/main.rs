//! homestock interactive inventory.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use homestock_cli::Session;
use homestock_inventory::InventoryStore;
use homestock_observability::{LogConfig, LogFormat};

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() -> ExitCode {
    let cli = Cli::parse();
    homestock_observability::tracing::init(&log_config_from_cli(&cli));

    let store = if cli.sample {
        InventoryStore::with_sample_items()
    } else {
        InventoryStore::new()
    };
    tracing::info!(items = store.len(), "session started");

    let styled = io::stdout().is_terminal();
    let mut session = Session::new(store, io::stdin().lock(), io::stdout().lock())
        .with_search(cli.search.unwrap_or_default())
        .styled(styled);

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

/// Explicit `--log-level` wins over `RUST_LOG`; otherwise `RUST_LOG` wins over the
/// default (warn, so logs stay out of the way of the interactive prompt).
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) | None => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
    };
    LogConfig {
        level,
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        use_env_filter: cli.log_level.is_none(),
        with_ansi: io::stderr().is_terminal(),
    }
}
