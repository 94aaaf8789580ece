//! Static polarity lexicons.
//!
//! Exact-match positive and negative label sets; any label found in neither
//! set is neutral. The sets are fixed for the lifetime of the process, which
//! keeps classification deterministic within a run and the chart's y-axis
//! semantics stable.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::Polarity;

/// Labels classified as positive.
pub static POSITIVE_LABELS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["기쁨", "감사", "행복", "설렘", "희망", "평온", "사랑", "만족"]
        .into_iter()
        .collect()
});

/// Labels classified as negative.
pub static NEGATIVE_LABELS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["불안", "슬픔", "분노", "후회", "외로움", "두려움", "짜증", "지침"]
        .into_iter()
        .collect()
});

/// Classifies an emotion label against the static lexicons.
///
/// Leading/trailing whitespace is ignored; matching is otherwise exact.
pub fn classify_label(label: &str) -> Polarity {
    let label = label.trim();
    if POSITIVE_LABELS.contains(label) {
        Polarity::Positive
    } else if NEGATIVE_LABELS.contains(label) {
        Polarity::Negative
    } else {
        Polarity::Neutral
    }
}
