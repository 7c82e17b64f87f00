//! Test utility functions for integration tests
//!
//! Provides common utilities for test setup, logging, and sweeps.

use std::io::Write;

use duparams_rf::Frequency;
use tempfile::NamedTempFile;
use tracing_subscriber::{fmt, EnvFilter};

/// Result type for integration tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Initialize logging for tests
///
/// Uses RUST_LOG environment variable if set, otherwise defaults to "warn"
/// so sweeps over thousands of conversions stay quiet.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Frequencies from `start_khz` up to (excluding) `end_khz` in steps of `step_khz`.
pub fn khz_sweep(start_khz: i64, end_khz: i64, step_khz: usize) -> impl Iterator<Item = Frequency> {
    (start_khz..end_khz).step_by(step_khz).map(Frequency::khz)
}

/// Writes `contents` to a temporary YAML file, removed when the handle drops.
pub fn write_temp_config(contents: &str) -> TestResult<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("duparams-")
        .suffix(".yaml")
        .tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_khz_sweep_bounds() {
        let values: Vec<_> = khz_sweep(1000, 4000, 1000).collect();
        assert_eq!(values, vec![Frequency::mhz(1), Frequency::mhz(2), Frequency::mhz(3)]);
    }

    #[test]
    fn test_write_temp_config() {
        let file = write_temp_config("frequency-band: 77\n").unwrap();
        let path = file.path().to_path_buf();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "frequency-band: 77\n");
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("yaml"));

        drop(file);
        assert!(!path.exists());
    }
}
