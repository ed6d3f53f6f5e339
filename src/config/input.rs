//! Input configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where judgments are read from
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    /// Judgment file (JSON or YAML by extension)
    pub path: Option<PathBuf>,

    /// Use the built-in demo dataset when no path is given
    #[serde(default = "default_use_demo")]
    pub use_demo: bool,
}

impl InputConfig {
    /// Validate input configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if !path.is_file() => Err(ValidationError::MissingInputFile(
                path.display().to_string(),
            )),
            _ => Ok(()),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: None,
            use_demo: default_use_demo(),
        }
    }
}

fn default_use_demo() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_input_config_defaults() {
        let config = InputConfig::default();
        assert!(config.path.is_none());
        assert!(config.use_demo);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_existing_file_accepted() {
        let file = NamedTempFile::new().unwrap();
        let config = InputConfig {
            path: Some(file.path().to_path_buf()),
            use_demo: false,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_rejected() {
        let config = InputConfig {
            path: Some(PathBuf::from("/definitely/not/here.json")),
            use_demo: false,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingInputFile(_))
        ));
    }
}
