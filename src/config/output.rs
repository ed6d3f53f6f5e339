//! Output configuration

use serde::Deserialize;

use super::error::ValidationError;

const MAX_PRECISION: usize = 12;

/// How results are printed
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Pretty-print the JSON report
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Decimals in the ranking summary
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Include the expert spread breakdown in the report
    #[serde(default)]
    pub include_spread: bool,
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.precision > MAX_PRECISION {
            return Err(ValidationError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            precision: default_precision(),
            include_spread: false,
        }
    }
}

fn default_pretty() -> bool {
    true
}

fn default_precision() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_defaults() {
        let config = OutputConfig::default();
        assert!(config.pretty);
        assert_eq!(config.precision, 5);
        assert!(!config.include_spread);
    }

    #[test]
    fn test_precision_limit() {
        let mut config = OutputConfig::default();
        config.precision = 12;
        assert!(config.validate().is_ok());
        config.precision = 13;
        assert_eq!(config.validate(), Err(ValidationError::InvalidPrecision(13)));
    }
}
