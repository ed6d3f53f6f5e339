//! Judgment Source Port - Interface for obtaining expert judgments.
//!
//! This port defines where a judgment set comes from, supporting files on
//! disk, the built-in demo dataset, and blank sets of a configured size.

use std::path::PathBuf;

use crate::domain::judgments::JudgmentSet;

/// Errors that can occur while loading judgments
#[derive(Debug, thiserror::Error)]
pub enum JudgmentSourceError {
    #[error("Judgment file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to deserialize judgments: {0}")]
    Deserialization(String),

    #[error("Unsupported judgment file format: {0}")]
    UnsupportedFormat(String),
}

/// Port for loading a judgment set
pub trait JudgmentSource: Send + Sync {
    /// Load a judgment set
    ///
    /// # Errors
    /// Returns `JudgmentSourceError::NotFound` if the backing data is missing,
    /// or another variant if it cannot be read or parsed
    fn load(&self) -> Result<JudgmentSet, JudgmentSourceError>;

    /// Short description of the source for logs
    fn describe(&self) -> String;
}
