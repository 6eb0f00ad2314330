//! Tracing/logging initialization.
//!
//! Logs always go to stderr so they never interleave with rendered output on stdout.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    Pretty,
    /// Single-line output.
    #[default]
    Compact,
    /// JSON lines for machine parsing.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Level used when `RUST_LOG` is unset (or when `use_env_filter` is false).
    pub level: LevelFilter,
    pub format: LogFormat,
    /// Honor `RUST_LOG` when present.
    pub use_env_filter: bool,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            format: LogFormat::default(),
            use_env_filter: true,
            with_ansi: false,
        }
    }
}

impl LogConfig {
    fn filter(&self) -> EnvFilter {
        let fallback = || EnvFilter::new(self.level.to_string());
        if self.use_env_filter {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
        } else {
            fallback()
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
    };
}
