//! Emotion history log and its chart projection.

mod chart;
mod log;

pub use chart::{ChartSeries, Y_MAX, Y_MIN};
pub use log::{HistoryLog, HistoryRecord};
