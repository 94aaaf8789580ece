//! Calendar-day value object for history records.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day-granularity calendar date, always UTC.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntryDate(NaiveDate);

impl EntryDate {
    /// Creates a date for the current UTC day.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Creates a date from year, month and day.
    ///
    /// Returns `None` for out-of-range components.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns the inner NaiveDate.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns the ISO-8601 date label used on the chart's x-axis.
    pub fn label(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
