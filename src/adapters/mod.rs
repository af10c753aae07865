//! Adapters - Implementations of port interfaces.
//!
//! - `http` - Axum REST API
//! - `render` - Markdown, HTML, PDF and SVG report output
//! - `storage` - In-memory session store

pub mod http;
pub mod render;
pub mod storage;

pub use render::{HtmlReportRenderer, MarkdownReportRenderer, PandocPdfRenderer, SvgBarChartRenderer};
pub use storage::InMemoryAssessmentRepository;
