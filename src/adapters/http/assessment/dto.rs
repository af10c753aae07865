//! HTTP DTOs (Data Transfer Objects) for assessment endpoints.
//!
//! These types define the JSON request/response structure for the assessment API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{AssessmentSession, WizardStep};
use crate::domain::catalog::{CompetencyDomain, ContentCatalog, ResponseKey};
use crate::domain::foundation::Rating;
use crate::domain::report::DomainAverage;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to record a self-rating.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordRatingRequest {
    pub domain: CompetencyDomain,
    /// Position of the item within its domain.
    pub index: usize,
    /// 1..=5.
    pub rating: u8,
}

/// Request to record a free-text answer.
///
/// `{"kind": "qualitative", "domain": "...", "index": 0, "text": "..."}` or
/// `{"kind": "reflection", "index": 0, "text": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordTextRequest {
    #[serde(flatten)]
    pub key: ResponseKey,
    pub text: String,
}

/// Query parameters for report download.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Current view of a session.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub id: String,
    /// Step number, 1..=4.
    pub step: u8,
    pub step_name: WizardStep,
    pub step_title: String,
    pub ratings: Vec<RatingEntry>,
    pub responses: Vec<TextEntry>,
    pub rated_count: usize,
    pub answered_count: usize,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingEntry {
    pub domain: CompetencyDomain,
    pub index: usize,
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextEntry {
    #[serde(flatten)]
    pub key: ResponseKey,
    pub text: String,
}

impl From<&AssessmentSession> for AssessmentResponse {
    fn from(session: &AssessmentSession) -> Self {
        let store = session.responses();
        Self {
            id: session.id().to_string(),
            step: session.step().as_u8(),
            step_name: session.step(),
            step_title: session.step().title().to_string(),
            ratings: store
                .ratings()
                .map(|(key, rating)| RatingEntry {
                    domain: key.domain,
                    index: key.index,
                    rating: rating.value(),
                })
                .collect(),
            responses: store
                .texts()
                .map(|(key, text)| TextEntry {
                    key,
                    text: text.to_string(),
                })
                .collect(),
            rated_count: store.rated_count(),
            answered_count: store.answered_count(),
            created_at: session.created_at().to_rfc3339(),
            updated_at: session.updated_at().to_rfc3339(),
        }
    }
}

/// Per-domain averages.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub session_id: String,
    pub domains: Vec<DomainAverageResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainAverageResponse {
    pub domain: CompetencyDomain,
    pub name: String,
    pub average: f64,
    pub rated: usize,
    pub total: usize,
}

impl From<DomainAverage> for DomainAverageResponse {
    fn from(avg: DomainAverage) -> Self {
        Self {
            domain: avg.domain,
            name: avg.domain.name().to_string(),
            average: avg.average,
            rated: avg.rated,
            total: avg.total,
        }
    }
}

/// Questionnaire content plus the page metadata the UI needs.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub page_title: String,
    pub page_icon: String,
    pub report_title: String,
    pub rating_scale: Vec<RatingScaleEntry>,
    /// Pre-selected value for unrated sliders; never stored.
    pub display_default: u8,
    pub steps: Vec<StepEntry>,
    pub domains: Vec<DomainContent>,
    pub reflection_questions: Vec<PromptEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingScaleEntry {
    pub value: u8,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepEntry {
    pub number: u8,
    pub name: WizardStep,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainContent {
    pub domain: CompetencyDomain,
    pub name: String,
    pub competencies: Vec<PromptEntry>,
    pub questions: Vec<PromptEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptEntry {
    pub index: usize,
    pub text: String,
}

/// Page metadata surfaced alongside the catalog.
#[derive(Debug, Clone)]
pub struct PageInfo {
    pub page_title: String,
    pub page_icon: String,
    pub report_title: String,
}

impl CatalogResponse {
    pub fn new(catalog: &ContentCatalog, page: &PageInfo) -> Self {
        Self {
            page_title: page.page_title.clone(),
            page_icon: page.page_icon.clone(),
            report_title: page.report_title.clone(),
            rating_scale: Rating::ALL
                .iter()
                .map(|r| RatingScaleEntry {
                    value: r.value(),
                    label: r.label().to_string(),
                    description: r.description().to_string(),
                })
                .collect(),
            display_default: Rating::DISPLAY_DEFAULT.value(),
            steps: WizardStep::ALL
                .iter()
                .map(|s| StepEntry {
                    number: s.as_u8(),
                    name: *s,
                    title: s.title().to_string(),
                })
                .collect(),
            domains: catalog
                .domains()
                .map(|domain| DomainContent {
                    domain,
                    name: domain.name().to_string(),
                    competencies: catalog
                        .items_in(domain)
                        .map(|item| PromptEntry {
                            index: item.key.index,
                            text: item.label.clone(),
                        })
                        .collect(),
                    questions: catalog
                        .questions_in(domain)
                        .map(|q| PromptEntry {
                            index: q.index,
                            text: q.prompt.clone(),
                        })
                        .collect(),
                })
                .collect(),
            reflection_questions: catalog
                .reflection_questions()
                .iter()
                .map(|q| PromptEntry {
                    index: q.index,
                    text: q.prompt.clone(),
                })
                .collect(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CompetencyKey;
    use crate::domain::foundation::SessionId;

    #[test]
    fn rating_request_deserializes() {
        let json = r#"{"domain": "strategic_decision_making", "index": 2, "rating": 4}"#;
        let req: RecordRatingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.domain, CompetencyDomain::StrategicDecisionMaking);
        assert_eq!(req.index, 2);
        assert_eq!(req.rating, 4);
    }

    #[test]
    fn text_request_deserializes_both_kinds() {
        let json = r#"{"kind": "qualitative", "domain": "emotional_intelligence", "index": 1, "text": "Calm"}"#;
        let req: RecordTextRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            req.key,
            ResponseKey::qualitative(CompetencyDomain::EmotionalIntelligence, 1)
        );
        assert_eq!(req.text, "Calm");

        let json = r#"{"kind": "reflection", "index": 4, "text": ""}"#;
        let req: RecordTextRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, ResponseKey::reflection(4));
        assert_eq!(req.text, "");
    }

    #[test]
    fn assessment_response_lists_recorded_values() {
        let catalog = ContentCatalog::standard();
        let mut session = AssessmentSession::new(SessionId::new());
        session
            .record_rating(
                catalog,
                CompetencyKey::new(CompetencyDomain::CommunicationExcellence, 1),
                Rating::Developing,
            )
            .unwrap();
        session
            .record_text(catalog, ResponseKey::reflection(2), "Mentoring".to_string())
            .unwrap();

        let response = AssessmentResponse::from(&session);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["step"], 1);
        assert_eq!(json["step_name"], "quantitative");
        assert_eq!(json["ratings"][0]["domain"], "communication_excellence");
        assert_eq!(json["ratings"][0]["rating"], 2);
        assert_eq!(json["responses"][0]["kind"], "reflection");
        assert_eq!(json["responses"][0]["text"], "Mentoring");
    }

    #[test]
    fn catalog_response_carries_scale_and_content() {
        let page = PageInfo {
            page_title: "Title".to_string(),
            page_icon: "icon".to_string(),
            report_title: "Report".to_string(),
        };
        let response = CatalogResponse::new(ContentCatalog::standard(), &page);

        assert_eq!(response.rating_scale.len(), 5);
        assert_eq!(response.display_default, 3);
        assert_eq!(response.steps.len(), 4);
        assert_eq!(response.domains.len(), 4);
        assert_eq!(response.reflection_questions.len(), 5);
        assert!(response.domains.iter().all(|d| d.questions.len() == 3));
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::bad_request("nope")).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json.get("details").is_none());
    }
}
