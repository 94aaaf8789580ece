//! Plain-text renderer for the mood chart series.
//!
//! One line per point: date label, axis label and signed value. Intended for
//! terminal output and log inspection; a graphical surface would implement
//! the same port.

use crate::domain::history::ChartSeries;
use crate::ports::ChartRenderer;

/// Renders the series as one text line per saved emotion.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextChartRenderer;

impl TextChartRenderer {
    /// Creates the renderer.
    pub fn new() -> Self {
        Self
    }
}

impl ChartRenderer for TextChartRenderer {
    fn render(&self, series: &ChartSeries) -> String {
        series
            .labels()
            .iter()
            .zip(series.values())
            .map(|(label, value)| {
                format!("{label}  {} ({value:+})", ChartSeries::axis_label(*value))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
