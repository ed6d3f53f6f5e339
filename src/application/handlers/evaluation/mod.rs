//! Evaluation handlers.

mod evaluate_judgments;

pub use evaluate_judgments::{EvaluateJudgmentsHandler, EvaluateJudgmentsQuery, EvaluationReport};
