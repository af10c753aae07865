//! RecordTextResponseHandler - Command handler for free-text answers.
//!
//! Covers both the qualitative questions and the reflection prompts. An
//! empty string is stored as given and is distinct from "never answered".

use std::sync::Arc;

use tracing::debug;

use crate::domain::assessment::{AssessmentError, AssessmentSession};
use crate::domain::catalog::{ContentCatalog, ResponseKey};
use crate::domain::foundation::SessionId;
use crate::ports::AssessmentSessionRepository;

use super::load_session;

#[derive(Debug, Clone)]
pub struct RecordTextResponseCommand {
    pub session_id: SessionId,
    pub key: ResponseKey,
    pub text: String,
}

pub struct RecordTextResponseHandler {
    repository: Arc<dyn AssessmentSessionRepository>,
    catalog: Arc<ContentCatalog>,
}

impl RecordTextResponseHandler {
    pub fn new(
        repository: Arc<dyn AssessmentSessionRepository>,
        catalog: Arc<ContentCatalog>,
    ) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordTextResponseCommand,
    ) -> Result<AssessmentSession, AssessmentError> {
        let mut session = load_session(self.repository.as_ref(), &cmd.session_id).await?;

        let length = cmd.text.chars().count();
        session.record_text(&self.catalog, cmd.key, cmd.text)?;
        self.repository.update(&session).await?;

        debug!(session_id = %cmd.session_id, key = %cmd.key, length, "Text response recorded");
        Ok(session)
    }
}
