//! Source selection from configuration.

use std::sync::Arc;

use super::{BlankJudgmentSource, DemoJudgmentSource, FileJudgmentSource};
use crate::config::{EngineConfig, InputConfig};
use crate::ports::JudgmentSource;

/// Picks the judgment source for a run.
///
/// An explicit file wins; otherwise the demo dataset when enabled, and a
/// blank set of the configured dimensions as the last resort.
pub fn select_source(input: &InputConfig, engine: &EngineConfig) -> Arc<dyn JudgmentSource> {
    match &input.path {
        Some(path) => Arc::new(FileJudgmentSource::new(path)),
        None if input.use_demo => Arc::new(DemoJudgmentSource),
        None => Arc::new(BlankJudgmentSource::new(
            engine.experts,
            engine.alternatives,
            engine.criteria,
        )),
    }
}
