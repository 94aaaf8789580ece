//! Rendering boundary for the mood chart.
//!
//! The projection itself is pure domain logic; this port is where an actual
//! drawing surface plugs in. Renderers own no state and redraw from the full
//! series on every call.

use crate::domain::history::ChartSeries;

/// Port for rendering the (date label, polarity value) line series.
pub trait ChartRenderer: Send + Sync {
    /// Renders the series to this renderer's output format.
    fn render(&self, series: &ChartSeries) -> String;
}
