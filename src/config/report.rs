//! Report and page presentation configuration

use serde::Deserialize;

use crate::domain::report::{
    LayoutOptions, ReportSettings, DEFAULT_MAX_ANSWER_LENGTH, DEFAULT_REPORT_TITLE,
};
use crate::ports::ExportFormat;

use super::error::ValidationError;

/// Report configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Heading of the generated report
    #[serde(default = "default_title")]
    pub title: String,

    /// Browser page title surfaced to the UI
    #[serde(default = "default_page_title")]
    pub page_title: String,

    /// Page icon surfaced to the UI
    #[serde(default = "default_page_icon")]
    pub page_icon: String,

    /// Download name without extension
    #[serde(default = "default_file_stem")]
    pub file_stem: String,

    /// Characters before a competency label is truncated in tables
    #[serde(default = "default_label_width")]
    pub label_width: usize,

    /// Longest accepted free-text answer, in characters
    #[serde(default = "default_max_answer_length")]
    pub max_answer_length: usize,

    /// Format used when a request names none
    #[serde(default = "default_format")]
    pub default_format: ExportFormat,

    /// Path to pandoc executable. If None, will search PATH.
    pub pandoc_path: Option<String>,

    /// PDF conversion timeout in seconds
    #[serde(default = "default_pdf_timeout")]
    pub pdf_timeout_secs: u64,
}

impl ReportConfig {
    pub fn settings(&self) -> ReportSettings {
        ReportSettings {
            title: self.title.clone(),
            max_answer_length: self.max_answer_length,
        }
    }

    pub fn layout(&self) -> LayoutOptions {
        LayoutOptions {
            label_width: self.label_width,
        }
    }

    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyReportTitle);
        }
        let stem_ok = !self.file_stem.is_empty()
            && self
                .file_stem
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !stem_ok {
            return Err(ValidationError::InvalidFileStem);
        }
        if !(10..=200).contains(&self.label_width) {
            return Err(ValidationError::InvalidLabelWidth);
        }
        if self.max_answer_length == 0 {
            return Err(ValidationError::InvalidMaxAnswerLength);
        }
        if self.pdf_timeout_secs == 0 || self.pdf_timeout_secs > 300 {
            return Err(ValidationError::InvalidPdfTimeout);
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            page_title: default_page_title(),
            page_icon: default_page_icon(),
            file_stem: default_file_stem(),
            label_width: default_label_width(),
            max_answer_length: default_max_answer_length(),
            default_format: default_format(),
            pandoc_path: None,
            pdf_timeout_secs: default_pdf_timeout(),
        }
    }
}

fn default_title() -> String {
    DEFAULT_REPORT_TITLE.to_string()
}

fn default_page_title() -> String {
    "Healthcare Leadership Self-Assessment".to_string()
}

fn default_page_icon() -> String {
    "🏥".to_string()
}

fn default_file_stem() -> String {
    "leadership_self_assessment".to_string()
}

fn default_label_width() -> usize {
    LayoutOptions::default().label_width
}

fn default_max_answer_length() -> usize {
    DEFAULT_MAX_ANSWER_LENGTH
}

fn default_format() -> ExportFormat {
    ExportFormat::Html
}

fn default_pdf_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ReportConfig::default();
        assert_eq!(config.file_stem, "leadership_self_assessment");
        assert_eq!(config.label_width, 60);
        assert_eq!(config.max_answer_length, 20_000);
        assert_eq!(config.default_format, ExportFormat::Html);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn settings_and_layout_follow_config() {
        let config = ReportConfig {
            title: "Team Report".to_string(),
            label_width: 40,
            max_answer_length: 500,
            ..Default::default()
        };
        assert_eq!(config.settings().title, "Team Report");
        assert_eq!(config.settings().max_answer_length, 500);
        assert_eq!(config.layout().label_width, 40);
    }

    #[test]
    fn file_stem_must_be_plain_name() {
        let config = ReportConfig {
            file_stem: "../report".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidFileStem));
    }

    #[test]
    fn label_width_is_bounded() {
        let config = ReportConfig {
            label_width: 5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidLabelWidth));
    }

    #[test]
    fn blank_title_is_rejected() {
        let config = ReportConfig {
            title: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyReportTitle));
    }
}
