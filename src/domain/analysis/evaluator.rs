//! ARAS Evaluator - The end-to-end ranking pipeline and its result.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::{
    AggregationEngine, Normalizer, RankedAlternative, Ranker, ReferenceSelector,
    UtilityAggregator, Weighter,
};
use crate::domain::foundation::{CriterionType, DomainError, ErrorCode};
use crate::domain::fuzzy::TriangularFuzzyNumber;
use crate::domain::judgments::{AlternativeScoreTerms, CriteriaWeightTerms};

type Tfn = TriangularFuzzyNumber;

/// Structural problems with the input matrices.
///
/// These are the only conditions the pipeline reports; missing terms,
/// zero divisors and empty sets are absorbed by defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("At least one expert is required")]
    NoExperts,

    #[error("Importance judgments cover {weights} experts but performance judgments cover {scores}")]
    ExpertCountMismatch { weights: usize, scores: usize },
}

impl From<EvaluationError> for DomainError {
    fn from(err: EvaluationError) -> Self {
        match err {
            EvaluationError::NoExperts => DomainError::new(ErrorCode::NoExperts, err.to_string()),
            EvaluationError::ExpertCountMismatch { weights, scores } => {
                DomainError::new(ErrorCode::DimensionMismatch, err.to_string())
                    .with_detail("weights", weights.to_string())
                    .with_detail("scores", scores.to_string())
            }
        }
    }
}

/// Resolved sizes of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub experts: usize,
    pub alternatives: usize,
    pub criteria: usize,
}

impl Dimensions {
    /// Derives and checks the sizes of the three inputs.
    ///
    /// Experts come from the importance matrix and must match the performance
    /// matrix. Alternatives come from the performance matrix. Criteria are the
    /// widest of the direction vector and the two label matrices.
    pub fn resolve(
        weights: &CriteriaWeightTerms,
        criterion_types: &[CriterionType],
        scores: &AlternativeScoreTerms,
    ) -> Result<Self, EvaluationError> {
        let experts = weights.expert_count();
        if experts == 0 {
            return Err(EvaluationError::NoExperts);
        }
        if scores.expert_count() != experts {
            return Err(EvaluationError::ExpertCountMismatch {
                weights: experts,
                scores: scores.expert_count(),
            });
        }
        let criteria = criterion_types
            .len()
            .max(weights.criterion_count())
            .max(scores.criterion_count());
        Ok(Self {
            experts,
            alternatives: scores.alternative_count(),
            criteria,
        })
    }

    /// Directions for every criterion; criteria beyond `criterion_types` are benefit.
    pub fn criterion_types(&self, criterion_types: &[CriterionType]) -> Vec<CriterionType> {
        (0..self.criteria)
            .map(|j| criterion_types.get(j).copied().unwrap_or_default())
            .collect()
    }
}

/// Every intermediate and final value of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub dimensions: Dimensions,
    /// `[criterion]`
    pub aggregated_weight: Vec<Tfn>,
    /// `[alternative][criterion]`
    pub aggregated_score: Vec<Vec<Tfn>>,
    /// `[criterion]`
    pub reference: Vec<Tfn>,
    /// `[alternative][criterion]`
    pub normalized: Vec<Vec<Tfn>>,
    /// `[alternative][criterion]`
    pub weighted: Vec<Vec<Tfn>>,
    /// `[alternative]`
    pub fuzzy_utility: Vec<Tfn>,
    /// `[alternative]`
    pub crisp_utility: Vec<f64>,
    /// `[alternative]`, each in `[0, 1]`
    pub optimality_degree: Vec<f64>,
    /// Alternative indices by descending crisp utility.
    pub ranking: Vec<usize>,
}

impl EvaluationResult {
    /// Rows of the ranking in order, best first.
    pub fn ranked(&self) -> Vec<RankedAlternative> {
        self.ranking
            .iter()
            .enumerate()
            .map(|(position, &alternative)| RankedAlternative {
                rank: position + 1,
                alternative,
                crisp_utility: self.crisp_utility[alternative],
                optimality_degree: self.optimality_degree[alternative],
            })
            .collect()
    }

    /// The single best alternative.
    ///
    /// Returns `None` when there are no alternatives or the top utility is tied.
    pub fn best_alternative(&self) -> Option<usize> {
        let (&first, rest) = self.ranking.split_first()?;
        match rest.first() {
            Some(&second) if self.crisp_utility[second] == self.crisp_utility[first] => None,
            _ => Some(first),
        }
    }

    /// True when no derived value is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        let tfns_finite = self
            .aggregated_weight
            .iter()
            .chain(&self.reference)
            .chain(&self.fuzzy_utility)
            .chain(self.aggregated_score.iter().flatten())
            .chain(self.normalized.iter().flatten())
            .chain(self.weighted.iter().flatten())
            .all(Tfn::is_finite);

        tfns_finite
            && self
                .crisp_utility
                .iter()
                .chain(&self.optimality_degree)
                .all(|v| v.is_finite())
    }

    /// Plain-text ranking table with `precision` decimals.
    pub fn summary(&self, precision: usize) -> String {
        let header = format!(
            "{:<6}{:<13}{:>16}{:>16}\n",
            "Rank", "Alternative", "Crisp utility", "Optimality"
        );
        self.ranked().iter().fold(header, |mut out, row| {
            out.push_str(&format!(
                "{:<6}{:<13}{:>16.p$}{:>16.p$}\n",
                row.rank,
                row.label(),
                row.crisp_utility,
                row.optimality_degree,
                p = precision
            ));
            out
        })
    }
}

/// The Fuzzy ARAS ranking pipeline.
///
/// Stateless: every call allocates fresh derived matrices and reads nothing
/// but its arguments, so identical inputs give bit-identical results.
pub struct ArasEvaluator;

impl ArasEvaluator {
    /// Ranks alternatives from linguistic expert judgments.
    ///
    /// # Pipeline
    /// 1. Mean-aggregate importance and performance terms across experts
    /// 2. Select the per-criterion reference (max for benefit, min for cost)
    /// 3. Normalize against the reference
    /// 4. Weight by aggregated importance
    /// 5. Sum across criteria and defuzzify by centroid
    /// 6. Divide by the best utility and sort descending
    ///
    /// # Errors
    /// - `NoExperts` when the importance matrix has no rows
    /// - `ExpertCountMismatch` when the two matrices disagree on expert count
    pub fn evaluate(
        weights: &CriteriaWeightTerms,
        criterion_types: &[CriterionType],
        scores: &AlternativeScoreTerms,
    ) -> Result<EvaluationResult, EvaluationError> {
        let dimensions = Dimensions::resolve(weights, criterion_types, scores)?;
        let criterion_types = dimensions.criterion_types(criterion_types);

        let aggregated_weight = AggregationEngine::aggregate_weights(weights, dimensions);
        let aggregated_score = AggregationEngine::aggregate_scores(scores, dimensions);
        let reference = ReferenceSelector::select(&aggregated_score, &criterion_types);
        let normalized = Normalizer::normalize(&aggregated_score, &reference, &criterion_types);
        let weighted = Weighter::weight(&normalized, &aggregated_weight);
        let fuzzy_utility = UtilityAggregator::fuzzy_utilities(&weighted);
        let crisp_utility = UtilityAggregator::crisp_utilities(&fuzzy_utility);
        let optimality_degree = Ranker::optimality_degrees(&crisp_utility);
        let ranking = Ranker::rank(&crisp_utility);

        let result = EvaluationResult {
            dimensions,
            aggregated_weight,
            aggregated_score,
            reference,
            normalized,
            weighted,
            fuzzy_utility,
            crisp_utility,
            optimality_degree,
            ranking,
        };

        debug_assert!(result.is_finite(), "pipeline produced a non-finite value");

        debug!(
            experts = dimensions.experts,
            alternatives = dimensions.alternatives,
            criteria = dimensions.criteria,
            best = ?result.ranking.first(),
            "Fuzzy ARAS evaluation completed"
        );

        Ok(result)
    }
}
