//! Chart renderer port.

use crate::domain::report::BarChart;

use super::RenderError;

/// Draws a `BarChart` as a standalone SVG document.
pub trait ChartRenderer: Send + Sync {
    fn render_svg(&self, chart: &BarChart) -> Result<String, RenderError>;
}
