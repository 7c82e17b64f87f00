//! Logging setup for duparams
//!
//! Configurable logging on top of the `tracing` crate. Output goes to stderr
//! so the calculated parameters on stdout stay machine readable.

use std::fmt;
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::error::Error;

/// Verbosity of the duparams log output
///
/// `Debug` shows the intermediate CORESET 0 search steps, `Info` one line per
/// calculated parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Every level, most verbose first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Name accepted by `--log-level` and `RUST_LOG`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = if name == "warning" { "warn" } else { name.as_str() };
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == name)
            .ok_or_else(|| Error::InvalidLogLevel(s.to_string()))
    }
}

fn env_or(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Tries to install the global subscriber, failing if one is already set.
///
/// The `RUST_LOG` environment variable overrides `level`.
pub fn try_init_logging(level: LogLevel) -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(env_or(&level.to_string()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Initialize the tracing subscriber with the specified log level.
///
/// Should be called once at application startup; later calls are ignored.
/// The log level can be overridden by the `RUST_LOG` environment variable.
///
/// # Example
///
/// ```
/// use duparams_common::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    let _ = try_init_logging(level);
}

/// Initialize logging with a custom filter string.
///
/// # Example
///
/// ```
/// use duparams_common::logging::init_logging_with_filter;
///
/// // Default to warn, but show every calculation step of the RF library
/// init_logging_with_filter("warn,duparams_rf=debug");
/// ```
pub fn init_logging_with_filter(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_or(filter))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .try_init();
}
