//! GetAssessmentHandler - Query handler for the current session view.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentError, AssessmentSession};
use crate::domain::foundation::SessionId;
use crate::ports::AssessmentSessionRepository;

use super::load_session;

#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub session_id: SessionId,
}

pub struct GetAssessmentHandler {
    repository: Arc<dyn AssessmentSessionRepository>,
}

impl GetAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetAssessmentQuery,
    ) -> Result<AssessmentSession, AssessmentError> {
        load_session(self.repository.as_ref(), &query.session_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryAssessmentRepository;

    #[tokio::test]
    async fn returns_stored_session() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let session = AssessmentSession::new(SessionId::new());
        repo.save(&session).await.unwrap();

        let found = GetAssessmentHandler::new(repo)
            .handle(GetAssessmentQuery { session_id: *session.id() })
            .await
            .unwrap();

        assert_eq!(found, session);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let id = SessionId::new();

        let err = GetAssessmentHandler::new(repo)
            .handle(GetAssessmentQuery { session_id: id })
            .await
            .unwrap_err();

        assert_eq!(err, AssessmentError::NotFound(id));
    }
}
