//! Validated outcome of one analysis cycle.

use serde::Deserialize;
use thiserror::Error;

use super::extractor::{extract_json_object, ExtractionError};
use crate::domain::emotion::{ActionPlan, EmotionCandidate};

/// Number of emotion candidates a successful analysis must yield.
pub const EXPECTED_CANDIDATES: usize = 3;

/// Errors from turning raw model output into an [`AnalysisOutcome`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisParseError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("malformed analysis payload: {0}")]
    Schema(String),

    #[error("expected {expected} emotion candidates, got {actual}")]
    CandidateCount { expected: usize, actual: usize },

    #[error("action plan missing entry for '{label}'")]
    MissingPlan { label: String },
}

/// Shape of the JSON payload embedded in the model's answer.
#[derive(Debug, Deserialize)]
struct AnalysisWire {
    #[serde(rename = "감정")]
    emotions: Vec<EmotionCandidate>,
    #[serde(rename = "액션리스트", default)]
    plan: ActionPlan,
}

/// Emotion candidates plus the action plan covering them.
///
/// Construction is the only way to obtain a value, so every outcome holds
/// exactly [`EXPECTED_CANDIDATES`] candidates and a plan entry for each.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub candidates: Vec<EmotionCandidate>,
    pub plan: ActionPlan,
}

impl AnalysisOutcome {
    /// Parses and validates raw model output.
    ///
    /// No partial results: any extraction, schema or coverage failure rejects
    /// the whole response.
    pub fn from_model_output(content: &str) -> Result<Self, AnalysisParseError> {
        let value = extract_json_object(content)?;

        let wire: AnalysisWire = serde_json::from_value(value)
            .map_err(|e| AnalysisParseError::Schema(e.to_string()))?;

        if wire.emotions.len() != EXPECTED_CANDIDATES {
            return Err(AnalysisParseError::CandidateCount {
                expected: EXPECTED_CANDIDATES,
                actual: wire.emotions.len(),
            });
        }

        if let Some(label) = wire
            .plan
            .missing_labels(wire.emotions.iter().map(|c| c.label.as_str()))
            .into_iter()
            .next()
        {
            return Err(AnalysisParseError::MissingPlan { label });
        }

        Ok(Self {
            candidates: wire.emotions,
            plan: wire.plan,
        })
    }

    /// True if `label` is one of the candidates.
    pub fn contains_label(&self, label: &str) -> bool {
        self.candidates.iter().any(|c| c.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_response() -> String {
        let payload = serde_json::json!({
            "감정": ["슬픔", "지침", "희망"],
            "액션리스트": {
                "슬픔": {
                    "카테고리": [
                        {"이름": "회복", "액션": [{"액션": "산책하기", "소요시간": "20분"}]}
                    ],
                    "핵심팁": "몸을 먼저 움직이기",
                    "루틴": [{"시간대": "저녁", "내용": "감정 일기 쓰기"}]
                },
                "지침": {"핵심팁": "오늘은 일찍 쉬기"},
                "희망": ["내일 계획 한 가지 적기"]
            }
        });
        format!("분석 결과입니다:\n{payload}\n도움이 되었길 바랍니다.")
    }

    #[test]
    fn parses_full_response_with_prose() {
        let outcome = AnalysisOutcome::from_model_output(&full_response()).unwrap();

        let labels: Vec<_> = outcome.candidates.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["슬픔", "지침", "희망"]);
        assert!(outcome.plan.plan_for("슬픔").is_some());
        assert!(outcome.contains_label("지침"));
        assert!(!outcome.contains_label("기쁨"));
    }

    #[test]
    fn candidate_order_follows_the_response() {
        let content = r#"{"감정":["희망","슬픔","지침"],"액션리스트":{"희망":[],"슬픔":[],"지침":[]}}"#;
        let outcome = AnalysisOutcome::from_model_output(content).unwrap();
        assert_eq!(outcome.candidates[0].label, "희망");
        assert_eq!(outcome.candidates[2].label, "지침");
    }

    #[test]
    fn rejects_wrong_candidate_count() {
        let content = r#"{"감정":["슬픔","희망"],"액션리스트":{"슬픔":[],"희망":[]}}"#;
        let result = AnalysisOutcome::from_model_output(content);
        assert_eq!(
            result,
            Err(AnalysisParseError::CandidateCount {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn rejects_plan_not_covering_every_candidate() {
        let content = r#"{"감정":["슬픔","지침","희망"],"액션리스트":{"슬픔":[],"희망":[]}}"#;
        let result = AnalysisOutcome::from_model_output(content);
        assert_eq!(
            result,
            Err(AnalysisParseError::MissingPlan {
                label: "지침".to_string()
            })
        );
    }

    #[test]
    fn rejects_payload_without_emotion_key() {
        let content = r#"{"액션리스트":{}}"#;
        assert!(matches!(
            AnalysisOutcome::from_model_output(content),
            Err(AnalysisParseError::Schema(_))
        ));
    }

    #[test]
    fn extraction_failure_propagates_as_typed_error() {
        let result = AnalysisOutcome::from_model_output("오늘은 응답이 없습니다");
        assert_eq!(
            result,
            Err(AnalysisParseError::Extraction(ExtractionError::NoJsonObject))
        );
    }
}
