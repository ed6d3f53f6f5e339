//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FUZZY_ARAS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use fuzzy_aras::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Blank sets have {} experts", config.engine.experts);
//! ```

mod engine;
mod error;
mod input;
mod logging;
mod output;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use input::InputConfig;
pub use logging::LoggingConfig;
pub use output::OutputConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dimensions of blank judgment sets
    #[serde(default)]
    pub engine: EngineConfig,

    /// Judgment input selection
    #[serde(default)]
    pub input: InputConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report formatting
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FUZZY_ARAS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FUZZY_ARAS__ENGINE__EXPERTS=3` -> `engine.experts = 3`
    /// - `FUZZY_ARAS__INPUT__PATH=judgments.yaml` -> `input.path = judgments.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FUZZY_ARAS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.input.validate()?;
        self.logging.validate()?;
        self.output.validate()?;
        Ok(())
    }
}
