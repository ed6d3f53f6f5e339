//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Engine dimension '{0}' must be at least 1")]
    InvalidDimension(&'static str),

    #[error("Output precision {0} exceeds maximum allowed (12)")]
    InvalidPrecision(usize),

    #[error("Judgment file does not exist: {0}")]
    MissingInputFile(String),

    #[error("Log level filter must not be empty")]
    EmptyLogLevel,
}
