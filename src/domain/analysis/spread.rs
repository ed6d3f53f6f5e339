//! Spread Analyzer - Five-point view of how far experts disagree.
//!
//! The spread is descriptive only. Ranking always uses the arithmetic mean
//! computed by `AggregationEngine`.

use serde::{Deserialize, Serialize};

use super::{Dimensions, EvaluationError};
use crate::domain::foundation::CriterionType;
use crate::domain::fuzzy::{LinguisticTerm, TriangularFuzzyNumber};
use crate::domain::judgments::{AlternativeScoreTerms, CriteriaWeightTerms};

/// `(min l, geomean l, geomean m, geomean u, max u)` across experts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpertSpread {
    pub lower: f64,
    pub lower_geomean: f64,
    pub middle_geomean: f64,
    pub upper_geomean: f64,
    pub upper: f64,
}

impl ExpertSpread {
    /// Spread of a set of expert opinions. `None` when there are none.
    pub fn of(tfns: &[TriangularFuzzyNumber]) -> Option<Self> {
        if tfns.is_empty() {
            return None;
        }
        let k = tfns.len() as f64;
        let geomean = |component: fn(&TriangularFuzzyNumber) -> f64| {
            tfns.iter().map(component).product::<f64>().powf(1.0 / k)
        };

        Some(Self {
            lower: tfns.iter().map(|t| t.l).fold(f64::INFINITY, f64::min),
            lower_geomean: geomean(|t| t.l),
            middle_geomean: geomean(|t| t.m),
            upper_geomean: geomean(|t| t.u),
            upper: tfns.iter().map(|t| t.u).fold(f64::NEG_INFINITY, f64::max),
        })
    }

    fn to_array(&self) -> [f64; 5] {
        [
            self.lower,
            self.lower_geomean,
            self.middle_geomean,
            self.upper_geomean,
            self.upper,
        ]
    }

    fn from_array(points: [f64; 5]) -> Self {
        Self {
            lower: points[0],
            lower_geomean: points[1],
            middle_geomean: points[2],
            upper_geomean: points[3],
            upper: points[4],
        }
    }

    fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let (a, b) = (self.to_array(), other.to_array());
        Self::from_array(std::array::from_fn(|i| f(a[i], b[i])))
    }
}

/// Spreads for every importance and performance cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadBreakdown {
    /// `[criterion]`
    pub weights: Vec<ExpertSpread>,
    /// `[alternative][criterion]`
    pub scores: Vec<Vec<ExpertSpread>>,
    /// `[criterion]`, best spread per point by direction.
    pub reference: Vec<ExpertSpread>,
}

pub struct SpreadAnalyzer;

impl SpreadAnalyzer {
    /// Builds the spread breakdown under the same dimension rules as evaluation.
    pub fn breakdown(
        weights: &CriteriaWeightTerms,
        criterion_types: &[CriterionType],
        scores: &AlternativeScoreTerms,
    ) -> Result<SpreadBreakdown, EvaluationError> {
        let dims = Dimensions::resolve(weights, criterion_types, scores)?;

        let weight_spreads = (0..dims.criteria)
            .map(|j| {
                let tfns: Vec<_> = (0..dims.experts).map(|e| weights.term(e, j).tfn()).collect();
                ExpertSpread::of(&tfns).unwrap_or_default()
            })
            .collect();

        let score_spreads: Vec<Vec<ExpertSpread>> = (0..dims.alternatives)
            .map(|a| {
                (0..dims.criteria)
                    .map(|j| {
                        let tfns: Vec<_> = (0..dims.experts)
                            .map(|e| scores.term(e, a, j).tfn())
                            .collect();
                        ExpertSpread::of(&tfns).unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        let reference = dims
            .criterion_types(criterion_types)
            .into_iter()
            .enumerate()
            .map(|(j, criterion_type)| {
                score_spreads
                    .iter()
                    .map(|row| row[j])
                    .reduce(|best, next| match criterion_type {
                        CriterionType::Benefit => best.zip_with(next, f64::max),
                        CriterionType::Cost => best.zip_with(next, f64::min),
                    })
                    .unwrap_or_default()
            })
            .collect();

        Ok(SpreadBreakdown {
            weights: weight_spreads,
            scores: score_spreads,
            reference,
        })
    }
}
