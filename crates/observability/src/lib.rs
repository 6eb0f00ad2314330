//! Tracing/logging setup shared by every homestock binary.

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use self::tracing::{LogConfig, LogFormat};
