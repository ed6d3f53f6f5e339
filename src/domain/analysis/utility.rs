//! Utility Aggregator - Criterion-summed fuzzy utility and its centroid.

use crate::domain::fuzzy::TriangularFuzzyNumber;

pub struct UtilityAggregator;

impl UtilityAggregator {
    /// Sums each alternative's weighted cells across criteria.
    ///
    /// An alternative with no criteria has utility `(0, 0, 0)`.
    pub fn fuzzy_utilities(weighted: &[Vec<TriangularFuzzyNumber>]) -> Vec<TriangularFuzzyNumber> {
        weighted.iter().map(|row| row.iter().sum()).collect()
    }

    /// Centroid of every fuzzy utility.
    pub fn crisp_utilities(fuzzy: &[TriangularFuzzyNumber]) -> Vec<f64> {
        fuzzy.iter().map(TriangularFuzzyNumber::centroid).collect()
    }
}
