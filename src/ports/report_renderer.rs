//! Report Renderer Port - Output format interface.
//!
//! One renderer per output format. Every renderer consumes the same
//! `ReportDocument`, so the three formats never drift apart in content.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::report::ReportDocument;

/// Port for rendering an assembled report into a downloadable artifact.
///
/// # Contract
///
/// Implementations must:
/// - Reproduce every block of the document, in order
/// - Leave the document untouched
/// - Report failures as `RenderError`, never panic
#[async_trait]
pub trait ReportRenderer: Send + Sync {
    /// Format this renderer produces.
    fn format(&self) -> ExportFormat;

    /// Render the document to bytes.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the artifact cannot be produced.
    async fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderError>;
}

/// Output formats for the report artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Markdown,
    Html,
    Pdf,
}

impl ExportFormat {
    /// MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::Pdf => write!(f, "pdf"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "html" | "htm" => Ok(ExportFormat::Html),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(RenderError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Rendered report ready for download.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub content: Vec<u8>,
    pub content_type: String,
    /// `<file_stem>.<extension>`.
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportedReport {
    pub fn new(content: Vec<u8>, format: ExportFormat, file_stem: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", file_stem, format.extension()),
            format,
        }
    }

    /// Value for the `Content-Disposition` header.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Errors that can occur while rendering a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    /// External converter (Pandoc) is not available.
    #[error("Renderer unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Rendering failed: {0}")]
    Failed(String),

    #[error("Rendering timed out after {0} seconds")]
    Timeout(u64),

    #[error("I/O error during rendering: {0}")]
    Io(String),
}

impl RenderError {
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable(reason.into())
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_match_formats() {
        assert_eq!(ExportFormat::Markdown.content_type(), "text/markdown; charset=utf-8");
        assert_eq!(ExportFormat::Html.content_type(), "text/html; charset=utf-8");
        assert_eq!(ExportFormat::Pdf.content_type(), "application/pdf");
    }

    #[test]
    fn format_parses_aliases_case_insensitively() {
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!("HTML".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(matches!(
            "docx".parse::<ExportFormat>(),
            Err(RenderError::UnsupportedFormat(f)) if f == "docx"
        ));
    }

    #[test]
    fn exported_report_uses_fixed_stem() {
        let report = ExportedReport::new(b"%PDF".to_vec(), ExportFormat::Pdf, "leadership_self_assessment");
        assert_eq!(report.filename, "leadership_self_assessment.pdf");
        assert_eq!(report.content_type, "application/pdf");
        assert_eq!(
            report.content_disposition(),
            "attachment; filename=\"leadership_self_assessment.pdf\""
        );
    }

    #[test]
    fn report_renderer_is_object_safe() {
        fn _accepts_dyn(_renderer: &dyn ReportRenderer) {}
    }
}
