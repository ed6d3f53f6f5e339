//! Normalizer - Ratio scaling of aggregated performance against the reference.

use crate::domain::foundation::CriterionType;
use crate::domain::fuzzy::TriangularFuzzyNumber;

/// `numerator / denominator`, or 0 when the denominator is zero.
fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Ratio normalization.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes one cell.
    ///
    /// - Benefit: `score / reference`
    /// - Cost: `reference / score`
    ///
    /// Each component is divided independently; a zero divisor yields 0.
    pub fn normalize_cell(
        score: TriangularFuzzyNumber,
        reference: TriangularFuzzyNumber,
        criterion_type: CriterionType,
    ) -> TriangularFuzzyNumber {
        match criterion_type {
            CriterionType::Benefit => score.zip_with(reference, guarded_ratio),
            CriterionType::Cost => reference.zip_with(score, guarded_ratio),
        }
    }

    /// Normalizes an `[alternative][criterion]` matrix.
    pub fn normalize(
        aggregated_scores: &[Vec<TriangularFuzzyNumber>],
        reference: &[TriangularFuzzyNumber],
        criterion_types: &[CriterionType],
    ) -> Vec<Vec<TriangularFuzzyNumber>> {
        aggregated_scores
            .iter()
            .map(|row| {
                row.iter()
                    .zip(reference)
                    .zip(criterion_types)
                    .map(|((&score, &ideal), &criterion_type)| {
                        Self::normalize_cell(score, ideal, criterion_type)
                    })
                    .collect()
            })
            .collect()
    }
}
