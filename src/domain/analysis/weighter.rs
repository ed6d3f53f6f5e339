//! Weighter - Applies aggregated criterion importance to normalized performance.

use crate::domain::fuzzy::TriangularFuzzyNumber;

pub struct Weighter;

impl Weighter {
    /// Component-wise product of each normalized cell with its criterion weight.
    pub fn weight(
        normalized: &[Vec<TriangularFuzzyNumber>],
        weights: &[TriangularFuzzyNumber],
    ) -> Vec<Vec<TriangularFuzzyNumber>> {
        normalized
            .iter()
            .map(|row| row.iter().zip(weights).map(|(&n, &w)| n * w).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Tfn = TriangularFuzzyNumber;

    #[test]
    fn multiplies_component_wise() {
        let normalized = vec![vec![Tfn::new(1.0, 0.5, 0.25), Tfn::new(1.0, 1.0, 1.0)]];
        let weights = vec![Tfn::new(0.4, 0.6, 0.8), Tfn::new(0.1, 0.3, 0.5)];
        let weighted = Weighter::weight(&normalized, &weights);

        assert!(weighted[0][0].approx_eq(&Tfn::new(0.4, 0.3, 0.2), 1e-12));
        assert_eq!(weighted[0][1], Tfn::new(0.1, 0.3, 0.5));
    }

    #[test]
    fn empty_matrix_stays_empty() {
        assert!(Weighter::weight(&[], &[Tfn::new(0.3, 0.5, 0.7)]).is_empty());
    }
}
