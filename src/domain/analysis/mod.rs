//! Analysis Module - Pure domain services for fuzzy multi-criteria ranking.
//!
//! This module contains stateless functions that turn linguistic expert
//! judgments into a ranking of alternatives using Fuzzy ARAS.
//!
//! # Components
//!
//! - `AggregationEngine` - Mean aggregation of expert opinions
//! - `ReferenceSelector` - Per-criterion ideal (max for benefit, min for cost)
//! - `Normalizer` - Zero-guarded ratio normalization against the reference
//! - `Weighter` - Component-wise importance weighting
//! - `UtilityAggregator` - Fuzzy utility sums and centroid defuzzification
//! - `Ranker` - Optimality degrees and stable descending order
//! - `ArasEvaluator` - The full pipeline, producing an `EvaluationResult`
//! - `SpreadAnalyzer` - Descriptive five-point expert spread
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod aggregation;
mod evaluator;
mod normalizer;
mod ranker;
mod reference;
mod spread;
mod utility;
mod weighter;

// Re-export all public types
pub use aggregation::AggregationEngine;
pub use evaluator::{ArasEvaluator, Dimensions, EvaluationError, EvaluationResult};
pub use normalizer::Normalizer;
pub use ranker::{RankedAlternative, Ranker};
pub use reference::ReferenceSelector;
pub use spread::{ExpertSpread, SpreadAnalyzer, SpreadBreakdown};
pub use utility::UtilityAggregator;
pub use weighter::Weighter;
