//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentSessionRepository` - Per-session state keyed by `SessionId`
//! - `ReportRenderer` - One output format for the assembled report
//! - `ChartRenderer` - SVG drawing of the summary chart

mod assessment_repository;
mod chart_renderer;
mod report_renderer;

pub use assessment_repository::AssessmentSessionRepository;
pub use chart_renderer::ChartRenderer;
pub use report_renderer::{ExportFormat, ExportedReport, RenderError, ReportRenderer};
