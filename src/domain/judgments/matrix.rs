//! Term matrices - raw expert judgments as linguistic labels.
//!
//! Labels are stored as entered so that legacy or unknown labels survive a
//! round trip through the editing surface. Reads go through the typed scale
//! lookup, which substitutes the neutral term for absent or unknown cells.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::fuzzy::{ImportanceTerm, LinguisticTerm, PerformanceTerm, ScaleKind};

/// Copies `row` into a row of exactly `len` cells, filling gaps with `neutral`.
fn resized_row(row: Option<&Vec<String>>, len: usize, neutral: &str) -> Vec<String> {
    (0..len)
        .map(|j| match row.and_then(|r| r.get(j)) {
            Some(label) if !label.is_empty() => label.clone(),
            _ => neutral.to_string(),
        })
        .collect()
}

/// Grows `row` with `neutral` cells until `index` is addressable.
fn pad_row(row: &mut Vec<String>, index: usize, neutral: &str) {
    if row.len() <= index {
        row.resize(index + 1, neutral.to_string());
    }
}

/// Importance labels indexed `[expert][criterion]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaWeightTerms {
    rows: Vec<Vec<String>>,
}

impl CriteriaWeightTerms {
    /// Creates a dense matrix filled with the neutral importance label.
    pub fn filled(experts: usize, criteria: usize) -> Self {
        let neutral = ScaleKind::Importance.neutral_label();
        Self {
            rows: vec![vec![neutral.to_string(); criteria]; experts],
        }
    }

    /// Creates a matrix from per-expert rows of labels. Rows may be ragged.
    pub fn from_rows<S: Into<String>>(rows: Vec<Vec<S>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Number of experts (rows).
    pub fn expert_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of criteria: the widest expert row.
    pub fn criterion_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Raw rows as stored.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The stored label, if the cell exists.
    pub fn label(&self, expert: usize, criterion: usize) -> Option<&str> {
        self.rows
            .get(expert)
            .and_then(|row| row.get(criterion))
            .map(String::as_str)
    }

    /// The typed term; absent or unknown cells read as `M`.
    pub fn term(&self, expert: usize, criterion: usize) -> ImportanceTerm {
        self.label(expert, criterion)
            .map(ImportanceTerm::from_label_or_default)
            .unwrap_or_default()
    }

    /// Overwrites one cell, padding a short row with neutral labels.
    pub fn set(
        &mut self,
        expert: usize,
        criterion: usize,
        label: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let experts = self.rows.len();
        let row = self
            .rows
            .get_mut(expert)
            .ok_or_else(|| ValidationError::index_out_of_range("expert", experts, expert))?;
        pad_row(row, criterion, ScaleKind::Importance.neutral_label());
        row[criterion] = label.into();
        Ok(())
    }

    /// Reshapes to `experts x criteria`, keeping labels at matching indices.
    pub fn resize(&mut self, experts: usize, criteria: usize) {
        let neutral = ScaleKind::Importance.neutral_label();
        self.rows = (0..experts)
            .map(|e| resized_row(self.rows.get(e), criteria, neutral))
            .collect();
    }
}

/// Performance labels indexed `[expert][alternative][criterion]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlternativeScoreTerms {
    blocks: Vec<Vec<Vec<String>>>,
}

impl AlternativeScoreTerms {
    /// Creates a dense matrix filled with the neutral performance label.
    pub fn filled(experts: usize, alternatives: usize, criteria: usize) -> Self {
        let neutral = ScaleKind::Performance.neutral_label();
        Self {
            blocks: vec![vec![vec![neutral.to_string(); criteria]; alternatives]; experts],
        }
    }

    /// Creates a matrix from per-expert blocks of per-alternative rows.
    pub fn from_blocks<S: Into<String>>(blocks: Vec<Vec<Vec<S>>>) -> Self {
        Self {
            blocks: blocks
                .into_iter()
                .map(|block| {
                    block
                        .into_iter()
                        .map(|row| row.into_iter().map(Into::into).collect())
                        .collect()
                })
                .collect(),
        }
    }

    /// Number of experts (blocks).
    pub fn expert_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of alternatives: the longest expert block.
    ///
    /// Experts with shorter blocks read as neutral for the missing rows.
    pub fn alternative_count(&self) -> usize {
        self.blocks.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of criteria: the widest alternative row of any expert.
    pub fn criterion_count(&self) -> usize {
        self.blocks
            .iter()
            .flatten()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }

    /// Raw blocks as stored.
    pub fn blocks(&self) -> &[Vec<Vec<String>>] {
        &self.blocks
    }

    /// The stored label, if the cell exists.
    pub fn label(&self, expert: usize, alternative: usize, criterion: usize) -> Option<&str> {
        self.blocks
            .get(expert)
            .and_then(|block| block.get(alternative))
            .and_then(|row| row.get(criterion))
            .map(String::as_str)
    }

    /// The typed term; absent or unknown cells read as `F`.
    pub fn term(&self, expert: usize, alternative: usize, criterion: usize) -> PerformanceTerm {
        self.label(expert, alternative, criterion)
            .map(PerformanceTerm::from_label_or_default)
            .unwrap_or_default()
    }

    /// Overwrites one cell, padding a short block or row with neutral labels.
    pub fn set(
        &mut self,
        expert: usize,
        alternative: usize,
        criterion: usize,
        label: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let experts = self.blocks.len();
        let block = self
            .blocks
            .get_mut(expert)
            .ok_or_else(|| ValidationError::index_out_of_range("expert", experts, expert))?;
        if block.len() <= alternative {
            block.resize(alternative + 1, Vec::new());
        }
        let row = &mut block[alternative];
        pad_row(row, criterion, ScaleKind::Performance.neutral_label());
        row[criterion] = label.into();
        Ok(())
    }

    /// Reshapes to `experts x alternatives x criteria`, keeping labels at matching indices.
    pub fn resize(&mut self, experts: usize, alternatives: usize, criteria: usize) {
        let neutral = ScaleKind::Performance.neutral_label();
        self.blocks = (0..experts)
            .map(|e| {
                let block = self.blocks.get(e);
                (0..alternatives)
                    .map(|a| resized_row(block.and_then(|b| b.get(a)), criteria, neutral))
                    .collect()
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_weights_use_neutral_label() {
        let weights = CriteriaWeightTerms::filled(2, 3);
        assert_eq!(weights.expert_count(), 2);
        assert_eq!(weights.label(1, 2), Some("M"));
        assert_eq!(weights.term(0, 0), ImportanceTerm::Medium);
    }

    #[test]
    fn missing_weight_cell_reads_as_medium() {
        let weights = CriteriaWeightTerms::from_rows(vec![vec!["VH"], vec![]]);
        assert_eq!(weights.term(0, 0), ImportanceTerm::VeryHigh);
        assert_eq!(weights.term(0, 4), ImportanceTerm::Medium);
        assert_eq!(weights.term(1, 0), ImportanceTerm::Medium);
        assert_eq!(weights.term(9, 0), ImportanceTerm::Medium);
    }

    #[test]
    fn criterion_count_is_widest_row() {
        let weights = CriteriaWeightTerms::from_rows(vec![vec!["M"], vec!["H", "L", "VL"]]);
        assert_eq!(weights.criterion_count(), 3);
        let scores =
            AlternativeScoreTerms::from_blocks(vec![vec![vec!["G"]], vec![vec!["F", "P"], vec![]]]);
        assert_eq!(scores.criterion_count(), 2);
        assert_eq!(AlternativeScoreTerms::default().criterion_count(), 0);
    }

    #[test]
    fn unknown_score_label_reads_as_fair_but_is_kept() {
        let scores = AlternativeScoreTerms::from_blocks(vec![vec![vec!["Excellent"]]]);
        assert_eq!(scores.label(0, 0, 0), Some("Excellent"));
        assert_eq!(scores.term(0, 0, 0), PerformanceTerm::Fair);
    }

    #[test]
    fn alternative_count_is_longest_block() {
        let scores = AlternativeScoreTerms::from_blocks(vec![
            vec![vec!["G"]],
            vec![vec!["G"], vec!["P"], vec!["VP"]],
        ]);
        assert_eq!(scores.alternative_count(), 3);
        assert_eq!(scores.term(0, 2, 0), PerformanceTerm::Fair);
    }

    #[test]
    fn set_weight_rejects_unknown_expert() {
        let mut weights = CriteriaWeightTerms::filled(1, 1);
        let err = weights.set(3, 0, "H").unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("expert", 0, 0, 3));
    }

    #[test]
    fn set_weight_pads_short_row() {
        let mut weights = CriteriaWeightTerms::from_rows(vec![Vec::<String>::new()]);
        weights.set(0, 2, "VH").unwrap();
        assert_eq!(weights.rows()[0], vec!["M", "M", "VH"]);
    }

    #[test]
    fn set_score_pads_short_block() {
        let mut scores = AlternativeScoreTerms::filled(1, 0, 0);
        scores.set(0, 1, 1, "VG").unwrap();
        assert_eq!(scores.alternative_count(), 2);
        assert_eq!(scores.label(0, 1, 0), Some("F"));
        assert_eq!(scores.term(0, 1, 1), PerformanceTerm::VeryGood);
        assert_eq!(scores.label(0, 0, 0), None);
    }

    #[test]
    fn resize_weights_preserves_and_fills() {
        let mut weights = CriteriaWeightTerms::from_rows(vec![vec!["VH", "L"]]);
        weights.resize(2, 3);
        assert_eq!(weights.rows()[0], vec!["VH", "L", "M"]);
        assert_eq!(weights.rows()[1], vec!["M", "M", "M"]);
    }

    #[test]
    fn resize_replaces_empty_labels_with_neutral() {
        let mut scores = AlternativeScoreTerms::from_blocks(vec![vec![vec!["", "G"]]]);
        scores.resize(1, 1, 2);
        assert_eq!(scores.blocks()[0][0], vec!["F", "G"]);
    }

    #[test]
    fn resize_scores_shrinks() {
        let mut scores = AlternativeScoreTerms::filled(3, 3, 3);
        scores.set(0, 0, 0, "VG").unwrap();
        scores.resize(1, 1, 1);
        assert_eq!(scores.expert_count(), 1);
        assert_eq!(scores.alternative_count(), 1);
        assert_eq!(scores.blocks()[0][0], vec!["VG"]);
    }

    #[test]
    fn matrices_serialize_as_nested_arrays() {
        let weights = CriteriaWeightTerms::from_rows(vec![vec!["M", "H"]]);
        assert_eq!(serde_json::to_string(&weights).unwrap(), r#"[["M","H"]]"#);

        let scores: AlternativeScoreTerms = serde_json::from_str(r#"[[["G","P"]]]"#).unwrap();
        assert_eq!(scores.term(0, 0, 1), PerformanceTerm::Poor);
    }
}
