//! Built-in Judgment Sources
//!
//! Sources that need no external data: the demo dataset and blank sets.

use crate::domain::judgments::{demo, JudgmentSet};
use crate::ports::{JudgmentSource, JudgmentSourceError};

/// Serves the canonical 4 x 4 x 5 sample dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoJudgmentSource;

impl JudgmentSource for DemoJudgmentSource {
    fn load(&self) -> Result<JudgmentSet, JudgmentSourceError> {
        Ok(demo::sample_judgments())
    }

    fn describe(&self) -> String {
        "demo dataset".to_string()
    }
}

/// Serves a neutral set of fixed dimensions
#[derive(Debug, Clone, Copy)]
pub struct BlankJudgmentSource {
    experts: usize,
    alternatives: usize,
    criteria: usize,
}

impl BlankJudgmentSource {
    pub fn new(experts: usize, alternatives: usize, criteria: usize) -> Self {
        Self {
            experts,
            alternatives,
            criteria,
        }
    }
}

impl JudgmentSource for BlankJudgmentSource {
    fn load(&self) -> Result<JudgmentSet, JudgmentSourceError> {
        Ok(JudgmentSet::blank(
            self.experts,
            self.alternatives,
            self.criteria,
        ))
    }

    fn describe(&self) -> String {
        format!(
            "blank {}x{}x{} set",
            self.experts, self.alternatives, self.criteria
        )
    }
}
