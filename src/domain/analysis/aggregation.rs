//! Aggregation Engine - Collapses expert judgments into consensus triangular numbers.

use crate::domain::fuzzy::{LinguisticTerm, TriangularFuzzyNumber};
use crate::domain::judgments::{AlternativeScoreTerms, CriteriaWeightTerms};

use super::Dimensions;

/// Mean aggregation of expert opinions.
pub struct AggregationEngine;

impl AggregationEngine {
    /// Component-wise arithmetic mean.
    ///
    /// Returns `None` for an empty input; the pipeline never asks for one
    /// since it requires at least one expert.
    pub fn mean<I>(tfns: I) -> Option<TriangularFuzzyNumber>
    where
        I: IntoIterator<Item = TriangularFuzzyNumber>,
    {
        let mut count = 0usize;
        let mut sum = TriangularFuzzyNumber::ZERO;
        for tfn in tfns {
            sum += tfn;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        let k = count as f64;
        Some(sum.map(|c| c / k))
    }

    /// Consensus importance per criterion.
    pub fn aggregate_weights(
        weights: &CriteriaWeightTerms,
        dims: Dimensions,
    ) -> Vec<TriangularFuzzyNumber> {
        (0..dims.criteria)
            .map(|j| {
                Self::mean((0..dims.experts).map(|e| weights.term(e, j).tfn()))
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Consensus performance per alternative and criterion.
    pub fn aggregate_scores(
        scores: &AlternativeScoreTerms,
        dims: Dimensions,
    ) -> Vec<Vec<TriangularFuzzyNumber>> {
        (0..dims.alternatives)
            .map(|a| {
                (0..dims.criteria)
                    .map(|j| {
                        Self::mean((0..dims.experts).map(|e| scores.term(e, a, j).tfn()))
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Tfn = TriangularFuzzyNumber;

    const EPS: f64 = 1e-12;

    fn dims(experts: usize, alternatives: usize, criteria: usize) -> Dimensions {
        Dimensions {
            experts,
            alternatives,
            criteria,
        }
    }

    #[test]
    fn mean_of_empty_input_is_none() {
        assert!(AggregationEngine::mean(Vec::<Tfn>::new()).is_none());
    }

    #[test]
    fn mean_of_single_value_is_identity() {
        let tfn = Tfn::new(0.1, 0.3, 0.5);
        assert_eq!(AggregationEngine::mean(vec![tfn]), Some(tfn));
    }

    #[test]
    fn mean_averages_each_component() {
        let mean = AggregationEngine::mean(vec![
            Tfn::new(0.3, 0.5, 0.7),
            Tfn::new(0.7, 0.7, 1.0),
        ])
        .unwrap();
        assert!(mean.approx_eq(&Tfn::new(0.5, 0.6, 0.85), EPS));
    }

    #[test]
    fn aggregate_weights_averages_experts() {
        let weights = CriteriaWeightTerms::from_rows(vec![vec!["M", "VL"], vec!["MH", "VH"]]);
        let aggregated = AggregationEngine::aggregate_weights(&weights, dims(2, 0, 2));

        assert_eq!(aggregated.len(), 2);
        assert!(aggregated[0].approx_eq(&Tfn::new(0.4, 0.6, 0.8), EPS));
        assert!(aggregated[1].approx_eq(&Tfn::new(0.45, 0.5, 0.55), EPS));
    }

    #[test]
    fn aggregate_weights_fills_missing_cells_with_medium() {
        let weights = CriteriaWeightTerms::from_rows(vec![vec!["VH"], vec![]]);
        let aggregated = AggregationEngine::aggregate_weights(&weights, dims(2, 0, 1));
        // (VH + M) / 2
        assert!(aggregated[0].approx_eq(&Tfn::new(0.6, 0.75, 0.85), EPS));
    }

    #[test]
    fn aggregate_scores_has_alternative_by_criterion_shape() {
        let scores = AlternativeScoreTerms::filled(3, 4, 2);
        let aggregated = AggregationEngine::aggregate_scores(&scores, dims(3, 4, 2));

        assert_eq!(aggregated.len(), 4);
        assert!(aggregated.iter().all(|row| row.len() == 2));
        assert!(aggregated
            .iter()
            .flatten()
            .all(|tfn| tfn.approx_eq(&Tfn::new(0.3, 0.5, 0.7), EPS)));
    }

    #[test]
    fn aggregate_scores_preserves_ordering() {
        let scores = AlternativeScoreTerms::from_blocks(vec![
            vec![vec!["VP", "G"]],
            vec![vec!["VG", "MP"]],
            vec![vec!["G", "P"]],
        ]);
        let aggregated = AggregationEngine::aggregate_scores(&scores, dims(3, 1, 2));
        assert!(aggregated[0].iter().all(Tfn::is_ordered));
    }
}
