//! StartAssessmentHandler - Command handler for beginning a new assessment.

use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::{AssessmentError, AssessmentSession};
use crate::domain::foundation::SessionId;
use crate::ports::AssessmentSessionRepository;

/// Command to start a new assessment session.
#[derive(Debug, Clone, Default)]
pub struct StartAssessmentCommand {
    /// Caller-chosen id; a fresh one is generated when absent.
    pub session_id: Option<SessionId>,
}

/// Handler for starting assessment sessions.
pub struct StartAssessmentHandler {
    repository: Arc<dyn AssessmentSessionRepository>,
}

impl StartAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: StartAssessmentCommand,
    ) -> Result<AssessmentSession, AssessmentError> {
        let session = AssessmentSession::new(cmd.session_id.unwrap_or_default());
        self.repository.save(&session).await?;

        info!(session_id = %session.id(), "Assessment session started");
        Ok(session)
    }
}
