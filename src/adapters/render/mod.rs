//! Report render adapters.
//!
//! - `MarkdownReportRenderer` - GitHub-flavoured Markdown
//! - `HtmlReportRenderer` - styled HTML page with an inline SVG chart
//! - `PandocPdfRenderer` - PDF via Pandoc
//! - `SvgBarChartRenderer` - the summary chart on its own

mod html_renderer;
mod markdown_renderer;
mod pandoc_pdf_renderer;
mod svg_chart;

pub use html_renderer::HtmlReportRenderer;
pub use markdown_renderer::MarkdownReportRenderer;
pub use pandoc_pdf_renderer::PandocPdfRenderer;
pub use svg_chart::SvgBarChartRenderer;

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
