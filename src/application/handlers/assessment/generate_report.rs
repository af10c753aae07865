//! GenerateReportHandler - Produces the downloadable report artifact.
//!
//! Reads the session and never writes it back: a failed render leaves the
//! step and every response exactly as they were, so the user can retry.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::assessment::{AssessmentError, WizardStep};
use crate::domain::catalog::ContentCatalog;
use crate::domain::foundation::SessionId;
use crate::domain::report::ReportAssembler;
use crate::ports::{AssessmentSessionRepository, ExportFormat, ExportedReport, ReportRenderer};

use super::load_session;

#[derive(Debug, Clone)]
pub struct GenerateReportCommand {
    pub session_id: SessionId,
    pub format: ExportFormat,
}

/// Handler for report generation.
///
/// # Dependencies
///
/// - `AssessmentSessionRepository`: Read the response snapshot
/// - `ReportAssembler`: Build the renderer-neutral document
/// - `ReportRenderer`: One per supported format
pub struct GenerateReportHandler {
    repository: Arc<dyn AssessmentSessionRepository>,
    catalog: Arc<ContentCatalog>,
    assembler: ReportAssembler,
    renderers: HashMap<ExportFormat, Arc<dyn ReportRenderer>>,
    file_stem: String,
}

impl GenerateReportHandler {
    pub fn new(
        repository: Arc<dyn AssessmentSessionRepository>,
        catalog: Arc<ContentCatalog>,
        assembler: ReportAssembler,
        file_stem: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            catalog,
            assembler,
            renderers: HashMap::new(),
            file_stem: file_stem.into(),
        }
    }

    /// Registers a renderer under the format it reports.
    pub fn with_renderer(mut self, renderer: Arc<dyn ReportRenderer>) -> Self {
        self.renderers.insert(renderer.format(), renderer);
        self
    }

    pub async fn handle(&self, cmd: GenerateReportCommand) -> Result<ExportedReport, AssessmentError> {
        let session = load_session(self.repository.as_ref(), &cmd.session_id).await?;

        if !session.step().is_report() {
            return Err(AssessmentError::invalid_state(format!(
                "report is only available on step {}, session is on step {}",
                WizardStep::LAST.as_u8(),
                session.step().as_u8()
            )));
        }

        let renderer = self.renderers.get(&cmd.format).ok_or_else(|| {
            AssessmentError::validation("format", format!("{} reports are not available", cmd.format))
        })?;

        let document = self
            .assembler
            .assemble(&self.catalog, session.responses())
            .map_err(|e| {
                warn!(session_id = %cmd.session_id, error = %e, "Report assembly failed");
                AssessmentError::render_failed(e.to_string())
            })?;

        let content = renderer.render(&document).await.map_err(|e| {
            warn!(session_id = %cmd.session_id, format = %cmd.format, error = %e, "Report rendering failed");
            AssessmentError::render_failed(e.to_string())
        })?;

        info!(
            session_id = %cmd.session_id,
            format = %cmd.format,
            bytes = content.len(),
            "Report generated"
        );
        Ok(ExportedReport::new(content, cmd.format, &self.file_stem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::render::{HtmlReportRenderer, MarkdownReportRenderer};
    use crate::adapters::storage::InMemoryAssessmentRepository;
    use crate::domain::assessment::AssessmentSession;
    use crate::domain::catalog::{CompetencyDomain, CompetencyKey, ResponseKey};
    use crate::domain::foundation::Rating;
    use crate::domain::report::{ReportDocument, ReportSettings};
    use crate::ports::RenderError;
    use async_trait::async_trait;

    struct FailingRenderer;

    #[async_trait]
    impl ReportRenderer for FailingRenderer {
        fn format(&self) -> ExportFormat {
            ExportFormat::Pdf
        }

        async fn render(&self, _document: &ReportDocument) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::service_unavailable("converter offline"))
        }
    }

    fn catalog() -> Arc<ContentCatalog> {
        Arc::new(ContentCatalog::standard().clone())
    }

    async fn stored_session(
        repo: &InMemoryAssessmentRepository,
        step: WizardStep,
        answer: &str,
    ) -> AssessmentSession {
        let mut session = AssessmentSession::new(SessionId::new());
        session
            .record_rating(
                ContentCatalog::standard(),
                CompetencyKey::new(CompetencyDomain::EmotionalIntelligence, 0),
                Rating::Expert,
            )
            .unwrap();
        session
            .record_text(ContentCatalog::standard(), ResponseKey::reflection(0), answer.to_string())
            .unwrap();
        while session.step() != step {
            session.advance();
        }
        repo.save(&session).await.unwrap();
        session
    }

    fn handler(repo: Arc<InMemoryAssessmentRepository>, settings: ReportSettings) -> GenerateReportHandler {
        GenerateReportHandler::new(
            repo,
            catalog(),
            ReportAssembler::new(settings),
            "leadership_self_assessment",
        )
        .with_renderer(Arc::new(MarkdownReportRenderer::default()))
        .with_renderer(Arc::new(HtmlReportRenderer::default()))
        .with_renderer(Arc::new(FailingRenderer))
    }

    #[tokio::test]
    async fn generates_named_attachment_on_report_step() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let session = stored_session(&repo, WizardStep::Report, "Listening").await;

        let report = handler(repo, ReportSettings::default())
            .handle(GenerateReportCommand {
                session_id: *session.id(),
                format: ExportFormat::Markdown,
            })
            .await
            .unwrap();

        assert_eq!(report.filename, "leadership_self_assessment.md");
        let text = String::from_utf8(report.content).unwrap();
        assert!(text.contains("Listening"));
        assert!(text.contains("Not rated"));
    }

    #[tokio::test]
    async fn report_before_last_step_is_invalid_state() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let session = stored_session(&repo, WizardStep::Strengths, "x").await;

        let err = handler(repo, ReportSettings::default())
            .handle(GenerateReportCommand {
                session_id: *session.id(),
                format: ExportFormat::Html,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AssessmentError::InvalidState(_)));
    }

    #[tokio::test]
    async fn renderer_failure_preserves_session() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let session = stored_session(&repo, WizardStep::Report, "Keep me").await;

        let err = handler(repo.clone(), ReportSettings::default())
            .handle(GenerateReportCommand {
                session_id: *session.id(),
                format: ExportFormat::Pdf,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AssessmentError::RenderFailed(_)));
        let stored = repo.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.step(), WizardStep::Report);
        assert_eq!(stored, session);
    }

    #[tokio::test]
    async fn oversized_answer_is_render_failure() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let session = stored_session(&repo, WizardStep::Report, "much too long for the limit").await;
        let settings = ReportSettings {
            max_answer_length: 5,
            ..ReportSettings::default()
        };

        let err = handler(repo.clone(), settings)
            .handle(GenerateReportCommand {
                session_id: *session.id(),
                format: ExportFormat::Html,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AssessmentError::RenderFailed(_)));
        assert!(err.message().contains("Please try again"));
        assert_eq!(repo.find_by_id(session.id()).await.unwrap().unwrap(), session);
    }

    #[tokio::test]
    async fn unregistered_format_is_validation_error() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let session = stored_session(&repo, WizardStep::Report, "x").await;
        let handler = GenerateReportHandler::new(
            repo,
            catalog(),
            ReportAssembler::default(),
            "leadership_self_assessment",
        );

        let err = handler
            .handle(GenerateReportCommand {
                session_id: *session.id(),
                format: ExportFormat::Pdf,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AssessmentError::ValidationFailed { ref field, .. } if field == "format"));
    }
}
