//! EndAssessmentHandler - Command handler for destroying a session.
//!
//! Every recorded response goes with it; nothing is retained.

use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::SessionId;
use crate::ports::AssessmentSessionRepository;

use super::load_session;

#[derive(Debug, Clone)]
pub struct EndAssessmentCommand {
    pub session_id: SessionId,
}

pub struct EndAssessmentHandler {
    repository: Arc<dyn AssessmentSessionRepository>,
}

impl EndAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: EndAssessmentCommand) -> Result<(), AssessmentError> {
        load_session(self.repository.as_ref(), &cmd.session_id).await?;
        self.repository.delete(&cmd.session_id).await?;

        info!(session_id = %cmd.session_id, "Assessment session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryAssessmentRepository;
    use crate::domain::assessment::AssessmentSession;

    #[tokio::test]
    async fn ending_removes_session() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let session = AssessmentSession::new(SessionId::new());
        repo.save(&session).await.unwrap();
        let handler = EndAssessmentHandler::new(repo.clone());

        handler
            .handle(EndAssessmentCommand { session_id: *session.id() })
            .await
            .unwrap();

        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn ending_twice_is_not_found() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let session = AssessmentSession::new(SessionId::new());
        repo.save(&session).await.unwrap();
        let handler = EndAssessmentHandler::new(repo);
        let cmd = EndAssessmentCommand { session_id: *session.id() };

        handler.handle(cmd.clone()).await.unwrap();
        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err, AssessmentError::NotFound(*session.id()));
    }
}
