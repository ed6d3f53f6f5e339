//! File-based Judgment Source Adapter
//!
//! Reads a judgment set from a JSON or YAML file, chosen by extension.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::judgments::JudgmentSet;
use crate::ports::{JudgmentSource, JudgmentSourceError};

/// Serialization formats a judgment file may use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgmentFormat {
    Json,
    Yaml,
}

impl JudgmentFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, JudgmentSourceError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(JudgmentSourceError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// File-based source for judgment sets
#[derive(Debug, Clone)]
pub struct FileJudgmentSource {
    path: PathBuf,
}

impl FileJudgmentSource {
    /// Create a source reading from `path`
    ///
    /// # Example
    /// ```ignore
    /// let source = FileJudgmentSource::new("./data/judgments.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl JudgmentSource for FileJudgmentSource {
    fn load(&self) -> Result<JudgmentSet, JudgmentSourceError> {
        let format = JudgmentFormat::from_path(&self.path)?;

        if !self.path.exists() {
            return Err(JudgmentSourceError::NotFound(self.path.clone()));
        }

        let contents =
            fs::read_to_string(&self.path).map_err(|e| JudgmentSourceError::Io(e.to_string()))?;

        let set = match format {
            JudgmentFormat::Json => serde_json::from_str(&contents)
                .map_err(|e| JudgmentSourceError::Deserialization(e.to_string()))?,
            JudgmentFormat::Yaml => serde_yaml::from_str(&contents)
                .map_err(|e| JudgmentSourceError::Deserialization(e.to_string()))?,
        };

        Ok(set)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
