//! Storage Adapters
//!
//! Implementations of the JudgmentSource port.
//!
//! ## Available Adapters
//!
//! - **FileJudgmentSource** - Reads judgments from JSON or YAML files
//! - **DemoJudgmentSource** - Serves the built-in sample dataset
//! - **BlankJudgmentSource** - Serves neutral sets of a fixed size
//!
//! `select_source` picks one of these from configuration.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{DemoJudgmentSource, FileJudgmentSource};
//!
//! // Production: file-based judgments
//! let source = FileJudgmentSource::new("./data/judgments.yaml");
//!
//! // Development: built-in sample
//! let source = DemoJudgmentSource;
//! ```

mod builtin_judgment_source;
mod file_judgment_source;
mod source_selector;

pub use builtin_judgment_source::{BlankJudgmentSource, DemoJudgmentSource};
pub use file_judgment_source::{FileJudgmentSource, JudgmentFormat};
pub use source_selector::select_source;
