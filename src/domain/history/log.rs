//! Append-only emotion history for the current session.

use serde::{Deserialize, Serialize};

use crate::domain::emotion::Polarity;
use crate::domain::foundation::EntryDate;

/// One saved emotion entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Day the emotion was recorded.
    pub date: EntryDate,
    /// Saved emotion label.
    #[serde(rename = "emotion")]
    pub label: String,
    /// Classified polarity, serialized as -1 / 0 / +1.
    pub polarity: Polarity,
}

impl HistoryRecord {
    /// Creates a record.
    pub fn new(date: EntryDate, label: impl Into<String>, polarity: Polarity) -> Self {
        Self {
            date,
            label: label.into(),
            polarity,
        }
    }
}

/// Ordered log of saved emotions.
///
/// `append` is the only mutator; records are never reordered, edited or
/// deduplicated. Insertion order is the chronological order of user saves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
}

impl HistoryLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end of the log.
    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    /// All records in save order.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Number of saved records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been saved yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, label: &str, polarity: Polarity) -> HistoryRecord {
        HistoryRecord::new(EntryDate::from_ymd(2026, 8, day).unwrap(), label, polarity)
    }

    #[test]
    fn append_grows_the_log_in_save_order() {
        let mut log = HistoryLog::new();
        log.append(record(1, "기쁨", Polarity::Positive));
        log.append(record(2, "슬픔", Polarity::Negative));
        log.append(record(3, "호기심", Polarity::Neutral));

        assert_eq!(log.len(), 3);
        let labels: Vec<_> = log.records().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["기쁨", "슬픔", "호기심"]);
    }

    #[test]
    fn duplicate_records_are_kept() {
        let mut log = HistoryLog::new();
        log.append(record(1, "슬픔", Polarity::Negative));
        log.append(record(1, "슬픔", Polarity::Negative));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn record_serializes_with_numeric_polarity() {
        let json = serde_json::to_string(&record(7, "슬픔", Polarity::Negative)).unwrap();
        assert!(json.contains("\"polarity\":-1"));
        assert!(json.contains("\"emotion\":\"슬픔\""));
        assert!(json.contains("\"date\":\"2026-08-07\""));
    }

    #[test]
    fn log_round_trips_through_json() {
        let mut log = HistoryLog::new();
        log.append(record(1, "기쁨", Polarity::Positive));
        log.append(record(2, "지침", Polarity::Negative));

        let json = serde_json::to_string(&log).unwrap();
        let back: HistoryLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
