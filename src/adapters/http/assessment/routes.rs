//! Route configuration for assessment endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    advance, download_report, end_assessment, get_assessment, get_catalog, get_summary,
    get_summary_chart, health, record_rating, record_text_response, reset, retreat,
    start_assessment, AssessmentAppState,
};

/// Creates the assessment router with all endpoints.
///
/// Routes:
/// - `GET /health` - Liveness check
/// - `GET /api/catalog` - Questionnaire content and rating scale
/// - `POST /api/assessments` - Start a session
/// - `GET /api/assessments/:id` - Current step and responses
/// - `DELETE /api/assessments/:id` - End a session
/// - `PUT /api/assessments/:id/ratings` - Record a rating
/// - `PUT /api/assessments/:id/responses` - Record a text answer
/// - `POST /api/assessments/:id/{advance,retreat,reset}` - Navigate
/// - `GET /api/assessments/:id/summary` - Per-domain averages
/// - `GET /api/assessments/:id/report?format=` - Download the report
/// - `GET /api/assessments/:id/report/chart` - Summary chart as SVG
pub fn assessment_router() -> Router<AssessmentAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/catalog", get(get_catalog))
        .route("/api/assessments", post(start_assessment))
        .route(
            "/api/assessments/:id",
            get(get_assessment).delete(end_assessment),
        )
        .route("/api/assessments/:id/ratings", put(record_rating))
        .route("/api/assessments/:id/responses", put(record_text_response))
        .route("/api/assessments/:id/advance", post(advance))
        .route("/api/assessments/:id/retreat", post(retreat))
        .route("/api/assessments/:id/reset", post(reset))
        .route("/api/assessments/:id/summary", get(get_summary))
        .route("/api/assessments/:id/report", get(download_report))
        .route("/api/assessments/:id/report/chart", get(get_summary_chart))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryAssessmentRepository;
    use crate::config::ReportConfig;
    use crate::domain::report::ReportDocument;
    use crate::ports::{ExportFormat, RenderError, ReportRenderer};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    // ───────────────────────────────────────────────────────────────
    // Test fixtures
    // ───────────────────────────────────────────────────────────────

    struct BrokenPdfRenderer;

    #[async_trait]
    impl ReportRenderer for BrokenPdfRenderer {
        fn format(&self) -> ExportFormat {
            ExportFormat::Pdf
        }

        async fn render(&self, _document: &ReportDocument) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::failed("converter crashed"))
        }
    }

    fn test_state() -> AssessmentAppState {
        let mut state = AssessmentAppState::from_config(
            &ReportConfig::default(),
            Arc::new(InMemoryAssessmentRepository::new()),
        );
        state.renderers.retain(|r| r.format() != ExportFormat::Pdf);
        state.renderers.push(Arc::new(BrokenPdfRenderer));
        state
    }

    async fn send(
        state: &AssessmentAppState,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = assessment_router()
            .with_state(state.clone())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes().to_vec();
        (status, headers, bytes)
    }

    async fn send_json(
        state: &AssessmentAppState,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, _, bytes) = send(state, method, uri, body).await;
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn start(state: &AssessmentAppState) -> String {
        let (status, json) = send_json(state, "POST", "/api/assessments", None).await;
        assert_eq!(status, StatusCode::CREATED);
        json["id"].as_str().unwrap().to_string()
    }

    async fn advance_to_report(state: &AssessmentAppState, id: &str) {
        for _ in 0..3 {
            let (status, _) =
                send_json(state, "POST", &format!("/api/assessments/{}/advance", id), None).await;
            assert_eq!(status, StatusCode::OK);
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Tests
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, json) = send_json(&test_state(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn catalog_lists_four_domains() {
        let (status, json) = send_json(&test_state(), "GET", "/api/catalog", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["domains"].as_array().unwrap().len(), 4);
        assert_eq!(json["rating_scale"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn full_flow_downloads_named_markdown_attachment() {
        let state = test_state();
        let id = start(&state).await;

        let (status, json) = send_json(
            &state,
            "PUT",
            &format!("/api/assessments/{}/ratings", id),
            Some(json!({"domain": "emotional_intelligence", "index": 0, "rating": 4})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["rated_count"], 1);

        let (status, _) = send_json(
            &state,
            "PUT",
            &format!("/api/assessments/{}/responses", id),
            Some(json!({"kind": "reflection", "index": 0, "text": "Coaching new managers"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        advance_to_report(&state, &id).await;

        let (status, headers, body) = send(
            &state,
            "GET",
            &format!("/api/assessments/{}/report?format=markdown", id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"leadership_self_assessment.md\""
        );
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("Coaching new managers"));
    }

    #[tokio::test]
    async fn report_before_last_step_is_conflict() {
        let state = test_state();
        let id = start(&state).await;

        let (status, json) = send_json(
            &state,
            "GET",
            &format!("/api/assessments/{}/report?format=html", id),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["code"], "INVALID_STATE_TRANSITION");
    }

    #[tokio::test]
    async fn failing_renderer_is_unprocessable_and_keeps_step() {
        let state = test_state();
        let id = start(&state).await;
        advance_to_report(&state, &id).await;

        let (status, json) = send_json(
            &state,
            "GET",
            &format!("/api/assessments/{}/report?format=pdf", id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["code"], "RENDER_FAILED");

        let (_, json) =
            send_json(&state, "GET", &format!("/api/assessments/{}", id), None).await;
        assert_eq!(json["step"], 4);
    }

    #[tokio::test]
    async fn unsupported_format_is_bad_request() {
        let state = test_state();
        let id = start(&state).await;
        advance_to_report(&state, &id).await;

        let (status, _) = send_json(
            &state,
            "GET",
            &format!("/api/assessments/{}/report?format=docx", id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn out_of_range_rating_is_bad_request() {
        let state = test_state();
        let id = start(&state).await;

        let (status, json) = send_json(
            &state,
            "PUT",
            &format!("/api/assessments/{}/ratings", id),
            Some(json!({"domain": "emotional_intelligence", "index": 0, "rating": 6})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let state = test_state();
        let id = start(&state).await;

        let (status, json) = send_json(
            &state,
            "PUT",
            &format!("/api/assessments/{}/ratings", id),
            Some(json!({"domain": "astrology", "index": 0, "rating": 3})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let id = crate::domain::foundation::SessionId::new();
        let (status, json) =
            send_json(&test_state(), "GET", &format!("/api/assessments/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "SESSION_NOT_FOUND");
    }

    #[tokio::test]
    async fn invalid_session_id_is_bad_request() {
        let (status, json) =
            send_json(&test_state(), "GET", "/api/assessments/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid session ID format");
    }

    #[tokio::test]
    async fn ended_session_is_gone() {
        let state = test_state();
        let id = start(&state).await;

        let (status, _) =
            send_json(&state, "DELETE", &format!("/api/assessments/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send_json(&state, "GET", &format!("/api/assessments/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn reset_returns_to_first_step_with_empty_responses() {
        let state = test_state();
        let id = start(&state).await;
        send_json(
            &state,
            "PUT",
            &format!("/api/assessments/{}/ratings", id),
            Some(json!({"domain": "communication_excellence", "index": 1, "rating": 2})),
        )
        .await;
        advance_to_report(&state, &id).await;

        let (status, json) =
            send_json(&state, "POST", &format!("/api/assessments/{}/reset", id), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["step"], 1);
        assert_eq!(json["rated_count"], 0);
    }

    #[tokio::test]
    async fn chart_is_served_as_svg() {
        let state = test_state();
        let id = start(&state).await;

        let (status, headers, body) = send(
            &state,
            "GET",
            &format!("/api/assessments/{}/report/chart", id),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "image/svg+xml");
        assert!(String::from_utf8(body).unwrap().starts_with("<svg"));
    }
}
