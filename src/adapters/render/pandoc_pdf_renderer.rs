//! PDF report renderer backed by Pandoc.
//!
//! Pandoc must be installed. If it is missing, rendering fails with
//! `ServiceUnavailable` and the caller can retry once it is available.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::domain::report::{LayoutOptions, ReportDocument};
use crate::ports::{ExportFormat, RenderError, ReportRenderer};

use super::MarkdownReportRenderer;

/// Markdown reader with raw passthrough and dollar math disabled, so answer
/// text never reaches the PDF engine as markup.
const MARKDOWN_READER: &str = "markdown-raw_tex-raw_html-raw_attribute-tex_math_dollars";

const PANDOC_ARGS: [&str; 9] = [
    "-f",
    MARKDOWN_READER,
    "-t",
    "pdf",
    "--pdf-engine=xelatex",
    "-V",
    "geometry:margin=1in",
    "-V",
    "fontsize=11pt",
];

#[derive(Debug, Clone)]
pub struct PandocPdfRenderer {
    markdown: MarkdownReportRenderer,
    /// Path to pandoc executable. If None, will search PATH.
    pandoc_path: Option<String>,
    timeout_secs: u64,
}

impl Default for PandocPdfRenderer {
    fn default() -> Self {
        Self::new(LayoutOptions::default())
    }
}

impl PandocPdfRenderer {
    pub fn new(layout: LayoutOptions) -> Self {
        Self {
            markdown: MarkdownReportRenderer::new(layout),
            pandoc_path: None,
            timeout_secs: 30,
        }
    }

    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    /// Check if Pandoc is installed and accessible.
    pub async fn is_available(&self) -> bool {
        Command::new(self.pandoc_command())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    async fn convert(&self, markdown: &str) -> Result<Vec<u8>, RenderError> {
        let mut child = Command::new(self.pandoc_command())
            .args(PANDOC_ARGS)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| RenderError::failed(format!("Failed to start Pandoc: {}", e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(markdown.as_bytes())
                .await
                .map_err(|e| RenderError::io(format!("Failed to write to Pandoc: {}", e)))?;
        }

        let output = tokio::time::timeout(
            Duration::from_secs(self.timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| RenderError::Timeout(self.timeout_secs))?
        .map_err(|e| RenderError::failed(format!("Pandoc execution failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RenderError::failed(format!(
                "Pandoc returned error: {}",
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl ReportRenderer for PandocPdfRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    async fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderError> {
        if !self.is_available().await {
            return Err(RenderError::service_unavailable(
                "Pandoc is not installed. PDF export requires Pandoc.",
            ));
        }
        let markdown = self.markdown.to_markdown(document);
        self.convert(&markdown).await
    }
}
