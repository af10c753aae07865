//! RecordRatingHandler - Command handler for rating one competency item.

use std::sync::Arc;

use tracing::debug;

use crate::domain::assessment::{AssessmentError, AssessmentSession};
use crate::domain::catalog::{CompetencyKey, ContentCatalog};
use crate::domain::foundation::{Rating, SessionId};
use crate::ports::AssessmentSessionRepository;

use super::load_session;

/// Command to record a self-rating.
#[derive(Debug, Clone)]
pub struct RecordRatingCommand {
    pub session_id: SessionId,
    pub key: CompetencyKey,
    /// Raw value as submitted; must be 1..=5.
    pub value: u8,
}

pub struct RecordRatingHandler {
    repository: Arc<dyn AssessmentSessionRepository>,
    catalog: Arc<ContentCatalog>,
}

impl RecordRatingHandler {
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
        cmd: RecordRatingCommand,
    ) -> Result<AssessmentSession, AssessmentError> {
        let rating = Rating::try_from_u8(cmd.value)?;
        let mut session = load_session(self.repository.as_ref(), &cmd.session_id).await?;

        session.record_rating(&self.catalog, cmd.key, rating)?;
        self.repository.update(&session).await?;

        debug!(session_id = %cmd.session_id, key = %cmd.key, rating = rating.value(), "Rating recorded");
        Ok(session)
    }
}
