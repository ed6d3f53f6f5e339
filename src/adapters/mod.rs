//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Judgment sources (files, demo dataset, blank sets)

pub mod storage;

pub use storage::{
    select_source, BlankJudgmentSource, DemoJudgmentSource, FileJudgmentSource, JudgmentFormat,
};
