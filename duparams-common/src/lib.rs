//! Common types and utilities for duparams
//!
//! This crate provides the error type, logging setup and raw configuration
//! model shared by the duparams crates.

pub mod config;
pub mod error;
pub mod logging;

pub use config::DuConfig;
pub use error::Error;
pub use logging::{init_logging, init_logging_with_filter, try_init_logging, LogLevel};
