//! Criterion direction: benefit (maximize) or cost (minimize).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction in which a criterion is optimized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    /// Higher aggregated performance is preferred.
    #[default]
    Benefit,
    /// Lower aggregated performance is preferred.
    Cost,
}

impl CriterionType {
    /// Returns the wire/display label.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionType::Benefit => "benefit",
            CriterionType::Cost => "cost",
        }
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
