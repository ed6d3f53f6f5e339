//! Engine configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Dimensions of a blank judgment set
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    #[serde(default = "default_experts")]
    pub experts: usize,

    #[serde(default = "default_alternatives")]
    pub alternatives: usize,

    #[serde(default = "default_criteria")]
    pub criteria: usize,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.experts == 0 {
            return Err(ValidationError::InvalidDimension("experts"));
        }
        if self.alternatives == 0 {
            return Err(ValidationError::InvalidDimension("alternatives"));
        }
        if self.criteria == 0 {
            return Err(ValidationError::InvalidDimension("criteria"));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            experts: default_experts(),
            alternatives: default_alternatives(),
            criteria: default_criteria(),
        }
    }
}

fn default_experts() -> usize {
    4
}

fn default_alternatives() -> usize {
    4
}

fn default_criteria() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.experts, 4);
        assert_eq!(config.alternatives, 4);
        assert_eq!(config.criteria, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let config = EngineConfig {
            alternatives: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidDimension("alternatives"))
        );
    }
}
