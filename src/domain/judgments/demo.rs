//! Canonical demonstration dataset: 4 experts, 4 alternatives, 5 benefit criteria.

use super::{AlternativeScoreTerms, CriteriaWeightTerms, JudgmentSet};
use crate::domain::foundation::CriterionType;

pub const DEMO_EXPERTS: usize = 4;
pub const DEMO_ALTERNATIVES: usize = 4;
pub const DEMO_CRITERIA: usize = 5;

const DEMO_IMPORTANCE: [[&str; DEMO_CRITERIA]; DEMO_EXPERTS] = [
    ["M", "MH", "H", "M", "L"],
    ["MH", "M", "H", "MH", "M"],
    ["M", "M", "H", "M", "L"],
    ["H", "MH", "MH", "M", "M"],
];

// Every expert rates the alternatives identically.
const DEMO_PERFORMANCE: [[&str; DEMO_CRITERIA]; DEMO_ALTERNATIVES] = [
    ["F", "MG", "G", "MP", "F"],
    ["MG", "G", "G", "MG", "F"],
    ["MP", "F", "MG", "MP", "MP"],
    ["G", "G", "VG", "G", "MG"],
];

/// Returns the demonstration judgments.
pub fn sample_judgments() -> JudgmentSet {
    let weights = CriteriaWeightTerms::from_rows(
        DEMO_IMPORTANCE.iter().map(|row| row.to_vec()).collect(),
    );
    let block: Vec<Vec<&str>> = DEMO_PERFORMANCE.iter().map(|row| row.to_vec()).collect();
    let scores = AlternativeScoreTerms::from_blocks(vec![block; DEMO_EXPERTS]);

    JudgmentSet::new(
        weights,
        vec![CriterionType::Benefit; DEMO_CRITERIA],
        scores,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_canonical_dimensions() {
        let set = sample_judgments();
        assert_eq!(set.experts(), DEMO_EXPERTS);
        assert_eq!(set.alternatives(), DEMO_ALTERNATIVES);
        assert_eq!(set.criteria(), DEMO_CRITERIA);
    }

    #[test]
    fn sample_is_dense() {
        let set = sample_judgments();
        let mut resized = set.clone();
        resized.resize(DEMO_EXPERTS, DEMO_ALTERNATIVES, DEMO_CRITERIA);
        assert_eq!(resized, set);
    }

    #[test]
    fn sample_ranks_fourth_alternative_first() {
        let result = sample_judgments().evaluate().unwrap();
        assert_eq!(result.ranking[0], 3);
        assert_eq!(result.optimality_degree[3], 1.0);
        // Third alternative is rated lowest on every criterion.
        assert_eq!(*result.ranking.last().unwrap(), 2);
    }
}
