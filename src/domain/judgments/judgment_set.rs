//! JudgmentSet - the mutable input builder owned by the editing surface.

use serde::{Deserialize, Serialize};

use super::{AlternativeScoreTerms, CriteriaWeightTerms};
use crate::domain::analysis::{
    ArasEvaluator, EvaluationError, EvaluationResult, SpreadAnalyzer, SpreadBreakdown,
};
use crate::domain::foundation::{CriterionType, ValidationError};

/// Everything a single evaluation reads: importance labels, criterion
/// directions, and performance labels.
///
/// Dimensions are derived from the contents: experts from the importance
/// matrix, alternatives from the performance matrix, criteria from the widest
/// of the direction vector and the label matrices. Criteria without a
/// direction are benefit. Sets built with [`JudgmentSet::blank`] or reshaped with
/// [`JudgmentSet::resize`] are dense; deserialized sets may be sparse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentSet {
    pub criteria_weights: CriteriaWeightTerms,
    #[serde(default)]
    pub criterion_types: Vec<CriterionType>,
    pub alternative_scores: AlternativeScoreTerms,
}

impl JudgmentSet {
    /// Creates a dense set pre-filled with neutral labels and benefit criteria.
    pub fn blank(experts: usize, alternatives: usize, criteria: usize) -> Self {
        Self {
            criteria_weights: CriteriaWeightTerms::filled(experts, criteria),
            criterion_types: vec![CriterionType::default(); criteria],
            alternative_scores: AlternativeScoreTerms::filled(experts, alternatives, criteria),
        }
    }

    /// Creates a set from already-built parts.
    pub fn new(
        criteria_weights: CriteriaWeightTerms,
        criterion_types: Vec<CriterionType>,
        alternative_scores: AlternativeScoreTerms,
    ) -> Self {
        Self {
            criteria_weights,
            criterion_types,
            alternative_scores,
        }
    }

    /// Number of experts.
    pub fn experts(&self) -> usize {
        self.criteria_weights.expert_count()
    }

    /// Number of alternatives.
    pub fn alternatives(&self) -> usize {
        self.alternative_scores.alternative_count()
    }

    /// Number of criteria: the widest of the direction vector and both label matrices.
    pub fn criteria(&self) -> usize {
        self.criterion_types
            .len()
            .max(self.criteria_weights.criterion_count())
            .max(self.alternative_scores.criterion_count())
    }

    /// Sets one expert's importance label for a criterion.
    pub fn set_importance(
        &mut self,
        expert: usize,
        criterion: usize,
        label: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.check_criterion(criterion)?;
        self.criteria_weights.set(expert, criterion, label)
    }

    /// Sets one expert's performance label for an alternative on a criterion.
    pub fn set_performance(
        &mut self,
        expert: usize,
        alternative: usize,
        criterion: usize,
        label: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.check_criterion(criterion)?;
        let alternatives = self.alternatives();
        if alternative >= alternatives {
            return Err(ValidationError::index_out_of_range(
                "alternative",
                alternatives,
                alternative,
            ));
        }
        let experts = self.alternative_scores.expert_count();
        if expert >= experts {
            return Err(ValidationError::index_out_of_range("expert", experts, expert));
        }
        self.alternative_scores
            .set(expert, alternative, criterion, label)
    }

    /// Sets the direction of a criterion.
    pub fn set_criterion_type(
        &mut self,
        criterion: usize,
        criterion_type: CriterionType,
    ) -> Result<(), ValidationError> {
        self.check_criterion(criterion)?;
        if self.criterion_types.len() <= criterion {
            self.criterion_types
                .resize(criterion + 1, CriterionType::default());
        }
        self.criterion_types[criterion] = criterion_type;
        Ok(())
    }

    /// Reshapes every matrix, keeping entries at indices that still exist and
    /// filling new cells with `M`, `F` and benefit.
    pub fn resize(&mut self, experts: usize, alternatives: usize, criteria: usize) {
        self.criteria_weights.resize(experts, criteria);
        self.criterion_types.resize(criteria, CriterionType::default());
        self.alternative_scores
            .resize(experts, alternatives, criteria);
        tracing::debug!(experts, alternatives, criteria, "judgment set resized");
    }

    /// Runs the ranking pipeline over the current contents.
    pub fn evaluate(&self) -> Result<EvaluationResult, EvaluationError> {
        ArasEvaluator::evaluate(
            &self.criteria_weights,
            &self.criterion_types,
            &self.alternative_scores,
        )
    }

    /// Five-point expert spread of the current contents.
    pub fn spread(&self) -> Result<SpreadBreakdown, EvaluationError> {
        SpreadAnalyzer::breakdown(
            &self.criteria_weights,
            &self.criterion_types,
            &self.alternative_scores,
        )
    }

    fn check_criterion(&self, criterion: usize) -> Result<(), ValidationError> {
        let criteria = self.criteria();
        if criterion >= criteria {
            return Err(ValidationError::index_out_of_range(
                "criterion",
                criteria,
                criterion,
            ));
        }
        Ok(())
    }
}
