//! Fuzzy Module - Triangular fuzzy numbers and the linguistic scales that produce them.

mod scale;
mod triangular;

pub use scale::{lookup, ImportanceTerm, LinguisticTerm, PerformanceTerm, ScaleKind};
pub use triangular::TriangularFuzzyNumber;
