//! Assessment-specific error types.

use crate::domain::catalog::{CompetencyKey, ResponseKey};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};

/// Assessment-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// Session was not found (never started, or already ended).
    NotFound(SessionId),
    /// Competency key is not part of the catalog.
    UnknownCompetency(CompetencyKey),
    /// Question key is not part of the catalog.
    UnknownQuestion(ResponseKey),
    /// Input failed validation.
    ValidationFailed { field: String, message: String },
    /// Operation not allowed on the current step.
    InvalidState(String),
    /// Report assembly or rendering failed; the session is unchanged.
    RenderFailed(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl AssessmentError {
    pub fn not_found(id: SessionId) -> Self {
        AssessmentError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AssessmentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn invalid_state(message: impl Into<String>) -> Self {
        AssessmentError::InvalidState(message.into())
    }
    pub fn render_failed(message: impl Into<String>) -> Self {
        AssessmentError::RenderFailed(message.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AssessmentError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::NotFound(_) => ErrorCode::SessionNotFound,
            AssessmentError::UnknownCompetency(_) => ErrorCode::CompetencyNotFound,
            AssessmentError::UnknownQuestion(_) => ErrorCode::QuestionNotFound,
            AssessmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AssessmentError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            AssessmentError::RenderFailed(_) => ErrorCode::RenderFailed,
            AssessmentError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            AssessmentError::NotFound(id) => format!("Assessment session not found: {}", id),
            AssessmentError::UnknownCompetency(key) => format!("Unknown competency: {}", key),
            AssessmentError::UnknownQuestion(key) => format!("Unknown question: {}", key),
            AssessmentError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AssessmentError::InvalidState(msg) => format!("Invalid state: {}", msg),
            AssessmentError::RenderFailed(msg) => {
                format!("Report could not be generated: {}. Please try again.", msg)
            }
            AssessmentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AssessmentError {}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        AssessmentError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::OutOfRange | ErrorCode::InvalidFormat => {
                AssessmentError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            ErrorCode::InvalidStateTransition => AssessmentError::InvalidState(err.message),
            ErrorCode::RenderFailed => AssessmentError::RenderFailed(err.message),
            _ => AssessmentError::Infrastructure(err.to_string()),
        }
    }
}
