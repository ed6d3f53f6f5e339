//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod evaluation;

pub use evaluation::{EvaluateJudgmentsHandler, EvaluateJudgmentsQuery, EvaluationReport};
