//! Ranker - Optimality degrees and the final ordering of alternatives.

use serde::{Deserialize, Serialize};

/// One row of the final ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// 0-based index of the alternative in the input matrices.
    pub alternative: usize,
    pub crisp_utility: f64,
    pub optimality_degree: f64,
}

impl RankedAlternative {
    /// Display label, `A1` for the first alternative.
    pub fn label(&self) -> String {
        format!("A{}", self.alternative + 1)
    }
}

pub struct Ranker;

impl Ranker {
    /// Expresses each utility as a fraction of the best one.
    ///
    /// # Edge Cases
    /// - Empty input: empty output
    /// - Best utility zero or non-finite: every degree is 0
    pub fn optimality_degrees(crisp_utilities: &[f64]) -> Vec<f64> {
        let max_utility = crisp_utilities
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        if !max_utility.is_finite() || max_utility == 0.0 {
            return vec![0.0; crisp_utilities.len()];
        }

        crisp_utilities.iter().map(|u| u / max_utility).collect()
    }

    /// Alternative indices by descending utility.
    ///
    /// The sort is stable: equal utilities keep their input order.
    pub fn rank(crisp_utilities: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..crisp_utilities.len()).collect();
        order.sort_by(|&a, &b| crisp_utilities[b].total_cmp(&crisp_utilities[a]));
        order
    }
}
