//! Chart renderer adapters.

mod text_renderer;

pub use text_renderer::TextChartRenderer;
