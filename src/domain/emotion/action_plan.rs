//! Action plan suggested by the model for each extracted emotion.
//!
//! The plan shape is schema-checked on parse with defaulted optional fields,
//! so a partially-trusted model response degrades to empty sections instead
//! of failing later during rendering.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One concrete suggested action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Short imperative action.
    #[serde(rename = "액션")]
    pub action: String,
    /// Optional explanation of the action.
    #[serde(rename = "설명", default)]
    pub description: Option<String>,
    /// Optional expected duration, free-form (e.g. "10분").
    #[serde(rename = "소요시간", default)]
    pub duration: Option<String>,
}

impl ActionItem {
    /// Creates an action with no description or duration.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            description: None,
            duration: None,
        }
    }
}

/// A named group of suggested actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCategory {
    #[serde(rename = "이름")]
    pub name: String,
    #[serde(rename = "액션", default)]
    pub actions: Vec<ActionItem>,
}

/// One slot of the suggested daily routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineSlot {
    /// Time of day the slot applies to (e.g. "아침").
    #[serde(rename = "시간대")]
    pub time_of_day: String,
    #[serde(rename = "내용")]
    pub content: String,
    /// Optional supporting tool (e.g. "타이머").
    #[serde(rename = "도구", default)]
    pub tool: Option<String>,
}

/// Plan for a single emotion.
///
/// Accepts either the full structured form or, for resilience against older
/// response shapes, a bare list of action strings which is folded into a
/// single category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EmotionPlanWire")]
pub struct EmotionPlan {
    /// Ordered action categories.
    #[serde(rename = "카테고리")]
    pub categories: Vec<ActionCategory>,
    /// One-line core tip for this emotion.
    #[serde(rename = "핵심팁")]
    pub core_tip: String,
    /// Ordered routine slots across the day.
    #[serde(rename = "루틴")]
    pub routine: Vec<RoutineSlot>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EmotionPlanWire {
    Simple(Vec<String>),
    Structured {
        #[serde(rename = "카테고리", default)]
        categories: Vec<ActionCategory>,
        #[serde(rename = "핵심팁", default)]
        core_tip: String,
        #[serde(rename = "루틴", default)]
        routine: Vec<RoutineSlot>,
    },
}

impl From<EmotionPlanWire> for EmotionPlan {
    fn from(wire: EmotionPlanWire) -> Self {
        match wire {
            EmotionPlanWire::Simple(actions) => EmotionPlan {
                categories: vec![ActionCategory {
                    name: "제안".to_string(),
                    actions: actions.into_iter().map(ActionItem::new).collect(),
                }],
                core_tip: String::new(),
                routine: Vec::new(),
            },
            EmotionPlanWire::Structured {
                categories,
                core_tip,
                routine,
            } => EmotionPlan {
                categories,
                core_tip,
                routine,
            },
        }
    }
}

/// Action plans keyed by emotion label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionPlan {
    plans: HashMap<String, EmotionPlan>,
}

impl ActionPlan {
    /// Creates an empty plan map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the plan for an emotion label, if present.
    pub fn plan_for(&self, label: &str) -> Option<&EmotionPlan> {
        self.plans.get(label)
    }

    /// Returns the labels that have no plan entry.
    pub fn missing_labels<'a>(&self, labels: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        labels
            .into_iter()
            .filter(|label| !self.plans.contains_key(*label))
            .map(str::to_string)
            .collect()
    }

    /// True when no emotion has a plan.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Inserts a plan for a label.
    pub fn insert(&mut self, label: impl Into<String>, plan: EmotionPlan) {
        self.plans.insert(label.into(), plan);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_structured_plan() {
        let json = r#"{
            "슬픔": {
                "카테고리": [
                    {"이름": "회복", "액션": [
                        {"액션": "산책하기", "설명": "가볍게 20분 걷기", "소요시간": "20분"}
                    ]}
                ],
                "핵심팁": "몸을 먼저 움직이기",
                "루틴": [
                    {"시간대": "저녁", "내용": "감정 일기 쓰기", "도구": "노트"}
                ]
            }
        }"#;

        let plan: ActionPlan = serde_json::from_str(json).unwrap();
        let entry = plan.plan_for("슬픔").unwrap();
        assert_eq!(entry.categories.len(), 1);
        assert_eq!(entry.categories[0].name, "회복");
        assert_eq!(entry.categories[0].actions[0].action, "산책하기");
        assert_eq!(entry.core_tip, "몸을 먼저 움직이기");
        assert_eq!(entry.routine[0].time_of_day, "저녁");
    }

    #[test]
    fn deserializes_bare_action_list() {
        let json = r#"{"기쁨": ["좋았던 순간을 기록하기", "친구와 공유하기", "스스로 칭찬하기"]}"#;
        let plan: ActionPlan = serde_json::from_str(json).unwrap();

        let entry = plan.plan_for("기쁨").unwrap();
        assert_eq!(entry.categories.len(), 1);
        assert_eq!(entry.categories[0].actions.len(), 3);
        assert_eq!(entry.categories[0].actions[1].action, "친구와 공유하기");
        assert!(entry.core_tip.is_empty());
        assert!(entry.routine.is_empty());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let json = r#"{"불안": {"핵심팁": "심호흡"}}"#;
        let plan: ActionPlan = serde_json::from_str(json).unwrap();

        let entry = plan.plan_for("불안").unwrap();
        assert!(entry.categories.is_empty());
        assert!(entry.routine.is_empty());
        assert_eq!(entry.core_tip, "심호흡");
    }

    #[test]
    fn missing_labels_reports_uncovered_candidates() {
        let json = r#"{"슬픔": [], "희망": []}"#;
        let plan: ActionPlan = serde_json::from_str(json).unwrap();

        let missing = plan.missing_labels(["슬픔", "지침", "희망"]);
        assert_eq!(missing, vec!["지침".to_string()]);
    }

    #[test]
    fn empty_object_is_empty_plan() {
        let plan: ActionPlan = serde_json::from_str("{}").unwrap();
        assert!(plan.is_empty());
        assert!(plan.plan_for("슬픔").is_none());
    }
}
