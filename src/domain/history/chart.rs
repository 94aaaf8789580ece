//! Pure projection from the history log to a line-chart series.

use super::HistoryLog;

/// Lower bound of the chart's y-axis domain.
pub const Y_MIN: i8 = -1;

/// Upper bound of the chart's y-axis domain.
pub const Y_MAX: i8 = 1;

/// Line-chart series derived from the history log.
///
/// Parallel sequences of x-labels (ISO dates, save order) and y-values
/// (polarity, fixed domain `[-1, 1]`). Re-derived from the full log on every
/// projection; holds no incremental state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    labels: Vec<String>,
    values: Vec<i8>,
}

impl ChartSeries {
    /// Projects the log into a series.
    pub fn project(log: &HistoryLog) -> Self {
        let labels = log.records().iter().map(|r| r.date.label()).collect();
        let values = log.records().iter().map(|r| r.polarity.value()).collect();
        Self { labels, values }
    }

    /// X-axis labels in save order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Y-values in save order.
    pub fn values(&self) -> &[i8] {
        &self.values
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fixed y-axis tick label. The mapping is never re-scaled.
    pub fn axis_label(value: i8) -> &'static str {
        match value {
            1 => "positive",
            -1 => "negative",
            _ => "neutral",
        }
    }

    /// The three tick positions of the fixed y-axis.
    pub fn ticks() -> [i8; 3] {
        [Y_MIN, 0, Y_MAX]
    }
}
