//! Reference Selector - Per-criterion ideal triangular number across alternatives.

use crate::domain::foundation::CriterionType;
use crate::domain::fuzzy::TriangularFuzzyNumber;

/// Direction-aware selection of the optimal reference vector.
pub struct ReferenceSelector;

impl ReferenceSelector {
    /// Ideal value for one criterion.
    ///
    /// # Algorithm
    /// - Benefit: component-wise maximum over the column
    /// - Cost: component-wise minimum over the column
    ///
    /// # Edge Cases
    /// - Empty column: `(0, 0, 0)`
    pub fn select_criterion<I>(column: I, criterion_type: CriterionType) -> TriangularFuzzyNumber
    where
        I: IntoIterator<Item = TriangularFuzzyNumber>,
    {
        column
            .into_iter()
            .reduce(|best, tfn| match criterion_type {
                CriterionType::Benefit => best.component_max(tfn),
                CriterionType::Cost => best.component_min(tfn),
            })
            .unwrap_or(TriangularFuzzyNumber::ZERO)
    }

    /// Reference vector over an `[alternative][criterion]` matrix.
    pub fn select(
        aggregated_scores: &[Vec<TriangularFuzzyNumber>],
        criterion_types: &[CriterionType],
    ) -> Vec<TriangularFuzzyNumber> {
        criterion_types
            .iter()
            .enumerate()
            .map(|(j, &criterion_type)| {
                Self::select_criterion(
                    aggregated_scores.iter().filter_map(|row| row.get(j).copied()),
                    criterion_type,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Tfn = TriangularFuzzyNumber;

    fn scores() -> Vec<Vec<Tfn>> {
        vec![
            vec![Tfn::new(0.5, 0.6, 0.85), Tfn::new(0.1, 0.3, 0.5)],
            vec![Tfn::new(0.4, 0.7, 0.9), Tfn::new(0.3, 0.2, 0.7)],
        ]
    }

    #[test]
    fn benefit_reference_takes_component_maximum() {
        let reference = ReferenceSelector::select(&scores(), &[CriterionType::Benefit; 2]);
        assert_eq!(reference[0], Tfn::new(0.5, 0.7, 0.9));
        assert_eq!(reference[1], Tfn::new(0.3, 0.3, 0.7));
    }

    #[test]
    fn cost_reference_takes_component_minimum() {
        let reference = ReferenceSelector::select(&scores(), &[CriterionType::Cost; 2]);
        assert_eq!(reference[0], Tfn::new(0.4, 0.6, 0.85));
        assert_eq!(reference[1], Tfn::new(0.1, 0.2, 0.5));
    }

    #[test]
    fn mixed_directions_apply_per_criterion() {
        let reference = ReferenceSelector::select(
            &scores(),
            &[CriterionType::Benefit, CriterionType::Cost],
        );
        assert_eq!(reference[0], Tfn::new(0.5, 0.7, 0.9));
        assert_eq!(reference[1], Tfn::new(0.1, 0.2, 0.5));
    }

    #[test]
    fn empty_alternative_set_gives_zero_reference() {
        let reference = ReferenceSelector::select(
            &[],
            &[CriterionType::Benefit, CriterionType::Cost],
        );
        assert_eq!(reference, vec![Tfn::ZERO, Tfn::ZERO]);
        assert!(reference.iter().all(Tfn::is_finite));
    }

    #[test]
    fn no_criteria_gives_empty_reference() {
        assert!(ReferenceSelector::select(&scores(), &[]).is_empty());
    }

    #[test]
    fn benefit_reference_dominates_every_alternative() {
        let scores = scores();
        let reference = ReferenceSelector::select(&scores, &[CriterionType::Benefit; 2]);
        for row in &scores {
            for (j, tfn) in row.iter().enumerate() {
                assert!(reference[j].dominates(tfn));
            }
        }
    }
}
