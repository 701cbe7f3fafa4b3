//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide logging from `config`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &LogConfig) {
    tracing::init(config);
}

/// Logging configuration (filter + output format).
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{LogConfig, LogFormat, UnknownLogFormat};
