//! Report assembler: catalog + responses → report document.

use thiserror::Error;

use crate::domain::assessment::ResponseStore;
use crate::domain::catalog::{ContentCatalog, ResponseKey};
use crate::domain::foundation::{Rating, Timestamp};

use super::document::{Block, QuestionAnswer, ReportDocument, Table, NOT_RATED};
use super::summary::summary_chart;

pub const DEFAULT_REPORT_TITLE: &str = "Healthcare Leadership Self-Assessment Report";
pub const DEFAULT_MAX_ANSWER_LENGTH: usize = 20_000;

const NEXT_STEPS: [&str; 5] = [
    "Review your full assessment in the downloaded report",
    "Reflect on your identified strengths and development areas",
    "Create a personal development plan based on your findings",
    "Share your insights with mentors or coaches as appropriate",
    "Set a date to retake this assessment to track your progress",
];

/// Errors raised while assembling a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("Answer to {key} is {length} characters; the limit is {max}")]
    AnswerTooLong {
        key: ResponseKey,
        length: usize,
        max: usize,
    },
}

/// Settings that shape the assembled report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub title: String,
    pub max_answer_length: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            max_answer_length: DEFAULT_MAX_ANSWER_LENGTH,
        }
    }
}

/// Builds the report document from a snapshot of the responses.
///
/// Reads only; the response store is never modified.
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    settings: ReportSettings,
}

impl ReportAssembler {
    pub fn new(settings: ReportSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Assembles the full report.
    ///
    /// # Errors
    ///
    /// - `AnswerTooLong` if any recorded answer exceeds the configured limit
    pub fn assemble(
        &self,
        catalog: &ContentCatalog,
        responses: &ResponseStore,
    ) -> Result<ReportDocument, ReportError> {
        self.check_answer_lengths(responses)?;

        let mut doc = ReportDocument::new(self.settings.title.clone());
        doc.push(Block::paragraph(format!(
            "Generated {}",
            Timestamp::now().to_display_string()
        )));

        self.push_quantitative(&mut doc, catalog, responses);
        self.push_qualitative(&mut doc, catalog, responses);
        self.push_reflections(&mut doc, catalog, responses);
        self.push_summary(&mut doc, catalog, responses);

        Ok(doc)
    }

    fn check_answer_lengths(&self, responses: &ResponseStore) -> Result<(), ReportError> {
        let max = self.settings.max_answer_length;
        for (key, text) in responses.texts() {
            let length = text.chars().count();
            if length > max {
                return Err(ReportError::AnswerTooLong { key, length, max });
            }
        }
        Ok(())
    }

    fn push_quantitative(
        &self,
        doc: &mut ReportDocument,
        catalog: &ContentCatalog,
        responses: &ResponseStore,
    ) {
        doc.push(Block::section("Part 1: Quantitative Self-Assessment"));
        doc.push(Block::paragraph("Rating Scale:"));
        doc.push(Block::List {
            ordered: false,
            items: Rating::ALL.iter().map(Rating::legend_line).collect(),
        });

        for domain in catalog.domains() {
            doc.push(Block::subsection(domain.name()));
            let mut table = Table::ratings();
            for item in catalog.items_in(domain) {
                let rating = responses
                    .rating(&item.key)
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| NOT_RATED.to_string());
                table.push_row(vec![item.label.clone(), rating]);
            }
            doc.push(Block::Table(table));
        }
    }

    fn push_qualitative(
        &self,
        doc: &mut ReportDocument,
        catalog: &ContentCatalog,
        responses: &ResponseStore,
    ) {
        doc.push(Block::section("Part 2: Qualitative Self-Assessment"));
        for domain in catalog.domains() {
            doc.push(Block::subsection(domain.name()));
            for question in catalog.questions_in(domain) {
                doc.push(Block::QuestionAnswer(QuestionAnswer::new(
                    question.prompt.clone(),
                    responses.text(&question.key()),
                )));
            }
        }
    }

    fn push_reflections(
        &self,
        doc: &mut ReportDocument,
        catalog: &ContentCatalog,
        responses: &ResponseStore,
    ) {
        doc.push(Block::section(
            "Part 3: Strengths and Development Opportunities",
        ));
        for question in catalog.reflection_questions() {
            doc.push(Block::QuestionAnswer(QuestionAnswer::new(
                question.prompt.clone(),
                responses.text(&question.key()),
            )));
        }
    }

    fn push_summary(
        &self,
        doc: &mut ReportDocument,
        catalog: &ContentCatalog,
        responses: &ResponseStore,
    ) {
        doc.push(Block::section("Assessment Summary"));
        doc.push(Block::Chart(summary_chart(catalog, responses)));

        doc.push(Block::section("Next Steps"));
        doc.push(Block::List {
            ordered: true,
            items: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
        });
    }
}
