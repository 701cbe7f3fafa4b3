//! Environment-driven logging configuration.
//!
//! - `RUST_LOG`: `EnvFilter` directives (default: `warn`)
//! - `STOCKROOM_LOG_FORMAT`: `pretty` (default) or `json`

use core::str::FromStr;

use thiserror::Error;

pub const FILTER_ENV: &str = "RUST_LOG";
pub const FORMAT_ENV: &str = "STOCKROOM_LOG_FORMAT";
pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line events.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format '{0}' (expected 'pretty' or 'json')")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Read the configuration from the process environment.
    ///
    /// Returns the config along with any value that had to be ignored, so the
    /// caller can report it once logging is up.
    pub fn from_env() -> (Self, Option<UnknownLogFormat>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LogConfig::from_env`], with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> (Self, Option<UnknownLogFormat>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let filter = lookup(FILTER_ENV)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let (format, rejected) = match lookup(FORMAT_ENV) {
            None => (LogFormat::default(), None),
            Some(raw) => match raw.parse::<LogFormat>() {
                Ok(format) => (format, None),
                Err(e) => (LogFormat::default(), Some(e)),
            },
        };

        (Self { filter, format }, rejected)
    }
}
