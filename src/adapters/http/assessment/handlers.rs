//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::adapters::render::{
    HtmlReportRenderer, MarkdownReportRenderer, PandocPdfRenderer, SvgBarChartRenderer,
};
use crate::application::handlers::assessment::{
    EndAssessmentCommand, EndAssessmentHandler, GenerateReportCommand, GenerateReportHandler,
    GetAssessmentHandler, GetAssessmentQuery, GetSummaryHandler, GetSummaryQuery,
    NavigateAssessmentCommand, NavigateAssessmentHandler, Navigation, RecordRatingCommand,
    RecordRatingHandler, RecordTextResponseCommand, RecordTextResponseHandler,
    RenderSummaryChartHandler, RenderSummaryChartQuery, StartAssessmentCommand,
    StartAssessmentHandler,
};
use crate::config::ReportConfig;
use crate::domain::assessment::AssessmentError;
use crate::domain::catalog::{CompetencyKey, ContentCatalog};
use crate::domain::foundation::SessionId;
use crate::domain::report::ReportAssembler;
use crate::ports::{AssessmentSessionRepository, ChartRenderer, ExportFormat, ReportRenderer};

use super::dto::{
    AssessmentResponse, CatalogResponse, DomainAverageResponse, ErrorResponse, PageInfo,
    RecordRatingRequest, RecordTextRequest, ReportQuery, SummaryResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub repository: Arc<dyn AssessmentSessionRepository>,
    pub catalog: Arc<ContentCatalog>,
    pub assembler: ReportAssembler,
    pub renderers: Vec<Arc<dyn ReportRenderer>>,
    pub chart_renderer: Arc<dyn ChartRenderer>,
    pub page: PageInfo,
    pub file_stem: String,
    pub default_format: ExportFormat,
}

impl AssessmentAppState {
    /// Wires the standard catalog and all three renderers from configuration.
    pub fn from_config(
        config: &ReportConfig,
        repository: Arc<dyn AssessmentSessionRepository>,
    ) -> Self {
        let layout = config.layout();
        let mut pdf = PandocPdfRenderer::new(layout).with_timeout(config.pdf_timeout_secs);
        if let Some(path) = &config.pandoc_path {
            pdf = pdf.with_pandoc_path(path.clone());
        }

        Self {
            repository,
            catalog: Arc::new(ContentCatalog::standard().clone()),
            assembler: ReportAssembler::new(config.settings()),
            renderers: vec![
                Arc::new(MarkdownReportRenderer::new(layout)),
                Arc::new(HtmlReportRenderer::new(layout)),
                Arc::new(pdf),
            ],
            chart_renderer: Arc::new(SvgBarChartRenderer::default()),
            page: PageInfo {
                page_title: config.page_title.clone(),
                page_icon: config.page_icon.clone(),
                report_title: config.title.clone(),
            },
            file_stem: config.file_stem.clone(),
            default_format: config.default_format,
        }
    }

    pub fn start_assessment_handler(&self) -> StartAssessmentHandler {
        StartAssessmentHandler::new(self.repository.clone())
    }

    pub fn get_assessment_handler(&self) -> GetAssessmentHandler {
        GetAssessmentHandler::new(self.repository.clone())
    }

    pub fn end_assessment_handler(&self) -> EndAssessmentHandler {
        EndAssessmentHandler::new(self.repository.clone())
    }

    pub fn record_rating_handler(&self) -> RecordRatingHandler {
        RecordRatingHandler::new(self.repository.clone(), self.catalog.clone())
    }

    pub fn record_text_handler(&self) -> RecordTextResponseHandler {
        RecordTextResponseHandler::new(self.repository.clone(), self.catalog.clone())
    }

    pub fn navigate_handler(&self) -> NavigateAssessmentHandler {
        NavigateAssessmentHandler::new(self.repository.clone())
    }

    pub fn get_summary_handler(&self) -> GetSummaryHandler {
        GetSummaryHandler::new(self.repository.clone(), self.catalog.clone())
    }

    pub fn render_chart_handler(&self) -> RenderSummaryChartHandler {
        RenderSummaryChartHandler::new(
            self.repository.clone(),
            self.catalog.clone(),
            self.chart_renderer.clone(),
        )
    }

    pub fn generate_report_handler(&self) -> GenerateReportHandler {
        self.renderers.iter().fold(
            GenerateReportHandler::new(
                self.repository.clone(),
                self.catalog.clone(),
                self.assembler.clone(),
                self.file_stem.clone(),
            ),
            |handler, renderer| handler.with_renderer(renderer.clone()),
        )
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, AssessmentApiError> {
    raw.parse()
        .map_err(|_| AssessmentApiError::BadRequest(ErrorResponse::bad_request("Invalid session ID format")))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/catalog - Questionnaire content and rating scale
pub async fn get_catalog(State(state): State<AssessmentAppState>) -> impl IntoResponse {
    Json(CatalogResponse::new(&state.catalog, &state.page))
}

/// GET /api/assessments/:id - Current step and responses
pub async fn get_assessment(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let session_id = parse_session_id(&id)?;
    let session = state
        .get_assessment_handler()
        .handle(GetAssessmentQuery { session_id })
        .await?;
    Ok(Json(AssessmentResponse::from(&session)))
}

/// GET /api/assessments/:id/summary - Per-domain averages
pub async fn get_summary(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let session_id = parse_session_id(&id)?;
    let averages = state
        .get_summary_handler()
        .handle(GetSummaryQuery { session_id })
        .await?;

    Ok(Json(SummaryResponse {
        session_id: session_id.to_string(),
        domains: averages.into_iter().map(DomainAverageResponse::from).collect(),
    }))
}

/// GET /api/assessments/:id/report/chart - Summary chart as SVG
pub async fn get_summary_chart(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let session_id = parse_session_id(&id)?;
    let svg = state
        .render_chart_handler()
        .handle(RenderSummaryChartQuery { session_id })
        .await?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

/// GET /api/assessments/:id/report?format= - Download the report
pub async fn download_report(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let session_id = parse_session_id(&id)?;
    let format = match query.format.as_deref() {
        Some(raw) => raw
            .parse::<ExportFormat>()
            .map_err(|e| AssessmentApiError::BadRequest(ErrorResponse::bad_request(e.to_string())))?,
        None => state.default_format,
    };

    let report = state
        .generate_report_handler()
        .handle(GenerateReportCommand { session_id, format })
        .await?;

    let disposition = report.content_disposition();
    Ok((
        [
            (header::CONTENT_TYPE, report.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.content,
    ))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments - Start a session
pub async fn start_assessment(
    State(state): State<AssessmentAppState>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let session = state
        .start_assessment_handler()
        .handle(StartAssessmentCommand::default())
        .await?;
    Ok((StatusCode::CREATED, Json(AssessmentResponse::from(&session))))
}

/// DELETE /api/assessments/:id - End a session
pub async fn end_assessment(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let session_id = parse_session_id(&id)?;
    state
        .end_assessment_handler()
        .handle(EndAssessmentCommand { session_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/assessments/:id/ratings - Record a rating
pub async fn record_rating(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
    payload: Result<Json<RecordRatingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let session_id = parse_session_id(&id)?;
    let Json(request) = payload?;

    let session = state
        .record_rating_handler()
        .handle(RecordRatingCommand {
            session_id,
            key: CompetencyKey::new(request.domain, request.index),
            value: request.rating,
        })
        .await?;
    Ok(Json(AssessmentResponse::from(&session)))
}

/// PUT /api/assessments/:id/responses - Record a text answer
pub async fn record_text_response(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
    payload: Result<Json<RecordTextRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let session_id = parse_session_id(&id)?;
    let Json(request) = payload?;

    let session = state
        .record_text_handler()
        .handle(RecordTextResponseCommand {
            session_id,
            key: request.key,
            text: request.text,
        })
        .await?;
    Ok(Json(AssessmentResponse::from(&session)))
}

async fn navigate(
    state: AssessmentAppState,
    id: String,
    navigation: Navigation,
) -> Result<Json<AssessmentResponse>, AssessmentApiError> {
    let session_id = parse_session_id(&id)?;
    let session = state
        .navigate_handler()
        .handle(NavigateAssessmentCommand {
            session_id,
            navigation,
        })
        .await?;
    Ok(Json(AssessmentResponse::from(&session)))
}

/// POST /api/assessments/:id/advance - Next step
pub async fn advance(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    navigate(state, id, Navigation::Advance).await
}

/// POST /api/assessments/:id/retreat - Previous step
pub async fn retreat(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    navigate(state, id, Navigation::Retreat).await
}

/// POST /api/assessments/:id/reset - Start over
pub async fn reset(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    navigate(state, id, Navigation::Reset).await
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum AssessmentApiError {
    BadRequest(ErrorResponse),
    NotFound(ErrorResponse),
    Conflict(ErrorResponse),
    Unprocessable(ErrorResponse),
    Internal(ErrorResponse),
}

impl From<AssessmentError> for AssessmentApiError {
    fn from(err: AssessmentError) -> Self {
        let body = ErrorResponse::new(err.code().to_string(), err.message());
        match err {
            AssessmentError::ValidationFailed { .. }
            | AssessmentError::UnknownCompetency(_)
            | AssessmentError::UnknownQuestion(_) => AssessmentApiError::BadRequest(body),
            AssessmentError::NotFound(_) => AssessmentApiError::NotFound(body),
            AssessmentError::InvalidState(_) => AssessmentApiError::Conflict(body),
            AssessmentError::RenderFailed(_) => AssessmentApiError::Unprocessable(body),
            AssessmentError::Infrastructure(_) => AssessmentApiError::Internal(body),
        }
    }
}

impl From<JsonRejection> for AssessmentApiError {
    fn from(rejection: JsonRejection) -> Self {
        AssessmentApiError::BadRequest(ErrorResponse::bad_request(rejection.body_text()))
    }
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AssessmentApiError::BadRequest(e) => (StatusCode::BAD_REQUEST, e),
            AssessmentApiError::NotFound(e) => (StatusCode::NOT_FOUND, e),
            AssessmentApiError::Conflict(e) => (StatusCode::CONFLICT, e),
            AssessmentApiError::Unprocessable(e) => (StatusCode::UNPROCESSABLE_ENTITY, e),
            AssessmentApiError::Internal(e) => {
                tracing::error!(message = %e.message, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal("Internal server error"))
            }
        };

        (status, Json(error)).into_response()
    }
}
