//! Error types for duparams

use thiserror::Error;

/// Error types shared by the duparams crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Log level name that is not one of trace, debug, info, warn, error.
    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),

    /// Logging subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}
