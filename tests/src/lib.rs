//! Integration test framework for duparams
#![allow(missing_docs)]
//!
//! Shared fixtures and helpers for the end-to-end tests of the DU RF
//! parameter workspace.
//!
//! # Components
//!
//! - [`test_fixtures`] - Reference DU configurations with their expected parameters
//! - [`test_utils`] - Logging setup, frequency sweeps and temporary config files
//!
//! # Test Categories
//!
//! 1. **RF Pipeline Tests** - configuration in, full parameter set out
//! 2. **Raster Property Tests** - round trips, monotonicity and range boundaries
//! 3. **Config Validation Tests** - every rejected configuration key

pub mod test_fixtures;
pub mod test_utils;

pub use test_fixtures::{reference_cells, ReferenceCell, BAND_77_YAML};
pub use test_utils::{init_test_logging, khz_sweep, write_temp_config, TestResult};
