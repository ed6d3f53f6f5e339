//! Judgments Module - Raw linguistic input to the decision engine.
//!
//! # Components
//!
//! - `CriteriaWeightTerms` - Importance labels per expert and criterion
//! - `AlternativeScoreTerms` - Performance labels per expert, alternative and criterion
//! - `JudgmentSet` - Mutable builder bundling both matrices with criterion directions
//! - `demo` - Canonical 4 x 4 x 5 sample dataset

pub mod demo;
mod judgment_set;
mod matrix;

pub use judgment_set::JudgmentSet;
pub use matrix::{AlternativeScoreTerms, CriteriaWeightTerms};
