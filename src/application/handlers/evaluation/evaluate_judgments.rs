//! EvaluateJudgmentsHandler - Query handler that loads judgments and ranks them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::analysis::{EvaluationResult, SpreadBreakdown};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::judgments::JudgmentSet;
use crate::ports::{JudgmentSource, JudgmentSourceError};

/// Query to evaluate whatever the configured source provides.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateJudgmentsQuery {
    /// Also compute the descriptive expert spread.
    pub include_spread: bool,
}

/// The evaluated judgments together with the pipeline output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub source: String,
    pub judgments: JudgmentSet,
    pub result: EvaluationResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<SpreadBreakdown>,
}

/// Handler for evaluating a judgment set.
pub struct EvaluateJudgmentsHandler {
    source: Arc<dyn JudgmentSource>,
}

impl EvaluateJudgmentsHandler {
    pub fn new(source: Arc<dyn JudgmentSource>) -> Self {
        Self { source }
    }

    pub fn handle(&self, query: EvaluateJudgmentsQuery) -> Result<EvaluationReport, DomainError> {
        let source = self.source.describe();
        debug!(source = %source, "Loading judgments");

        let judgments = self.source.load().map_err(source_error)?;
        let result = judgments.evaluate()?;
        let spread = if query.include_spread {
            Some(judgments.spread()?)
        } else {
            None
        };

        info!(
            source = %source,
            alternatives = result.dimensions.alternatives,
            best = ?result.best_alternative(),
            "Judgments evaluated"
        );

        Ok(EvaluationReport {
            source,
            judgments,
            result,
            spread,
        })
    }
}

fn source_error(err: JudgmentSourceError) -> DomainError {
    match &err {
        JudgmentSourceError::NotFound(path) => {
            DomainError::new(ErrorCode::JudgmentsNotFound, err.to_string())
                .with_detail("path", path.display().to_string())
        }
        JudgmentSourceError::UnsupportedFormat(_) => {
            DomainError::new(ErrorCode::InvalidFormat, err.to_string())
        }
        JudgmentSourceError::Io(_) | JudgmentSourceError::Deserialization(_) => {
            DomainError::new(ErrorCode::JudgmentsUnreadable, err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::judgments::demo::sample_judgments;
    use crate::domain::judgments::{AlternativeScoreTerms, CriteriaWeightTerms};
    use std::path::PathBuf;

    struct MockJudgmentSource {
        judgments: Option<JudgmentSet>,
    }

    impl MockJudgmentSource {
        fn with(judgments: JudgmentSet) -> Self {
            Self {
                judgments: Some(judgments),
            }
        }

        fn missing() -> Self {
            Self { judgments: None }
        }
    }

    impl JudgmentSource for MockJudgmentSource {
        fn load(&self) -> Result<JudgmentSet, JudgmentSourceError> {
            self.judgments
                .clone()
                .ok_or_else(|| JudgmentSourceError::NotFound(PathBuf::from("mock.json")))
        }

        fn describe(&self) -> String {
            "mock".to_string()
        }
    }

    #[test]
    fn evaluates_loaded_judgments() {
        let handler = EvaluateJudgmentsHandler::new(Arc::new(MockJudgmentSource::with(
            sample_judgments(),
        )));

        let report = handler.handle(EvaluateJudgmentsQuery::default()).unwrap();
        assert_eq!(report.source, "mock");
        assert_eq!(report.judgments, sample_judgments());
        assert_eq!(report.result.ranking[0], 3);
        assert!(report.spread.is_none());
    }

    #[test]
    fn includes_spread_on_request() {
        let handler = EvaluateJudgmentsHandler::new(Arc::new(MockJudgmentSource::with(
            JudgmentSet::blank(2, 3, 4),
        )));

        let report = handler
            .handle(EvaluateJudgmentsQuery {
                include_spread: true,
            })
            .unwrap();
        let spread = report.spread.unwrap();
        assert_eq!(spread.weights.len(), 4);
        assert_eq!(spread.scores.len(), 3);
    }

    #[test]
    fn returns_not_found_when_source_is_missing() {
        let handler = EvaluateJudgmentsHandler::new(Arc::new(MockJudgmentSource::missing()));

        let err = handler.handle(EvaluateJudgmentsQuery::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::JudgmentsNotFound);
        assert_eq!(err.details.get("path"), Some(&"mock.json".to_string()));
    }

    #[test]
    fn returns_mismatch_for_inconsistent_experts() {
        let set = JudgmentSet::new(
            CriteriaWeightTerms::filled(2, 1),
            vec![Default::default()],
            AlternativeScoreTerms::filled(1, 2, 1),
        );
        let handler = EvaluateJudgmentsHandler::new(Arc::new(MockJudgmentSource::with(set)));

        let err = handler.handle(EvaluateJudgmentsQuery::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::DimensionMismatch);
    }

    #[test]
    fn report_serializes_without_empty_spread() {
        let handler = EvaluateJudgmentsHandler::new(Arc::new(MockJudgmentSource::with(
            JudgmentSet::blank(1, 1, 1),
        )));
        let report = handler.handle(EvaluateJudgmentsQuery::default()).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("spread").is_none());
        assert_eq!(json["result"]["ranking"], serde_json::json!([0]));
    }

    #[test]
    fn maps_unsupported_format_to_invalid_format() {
        let err = source_error(JudgmentSourceError::UnsupportedFormat("x.csv".into()));
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
