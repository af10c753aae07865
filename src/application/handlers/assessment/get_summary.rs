//! GetSummaryHandler - Query handler for per-domain averages.

use std::sync::Arc;

use crate::domain::assessment::AssessmentError;
use crate::domain::catalog::ContentCatalog;
use crate::domain::foundation::SessionId;
use crate::domain::report::{domain_averages, DomainAverage};
use crate::ports::AssessmentSessionRepository;

use super::load_session;

#[derive(Debug, Clone)]
pub struct GetSummaryQuery {
    pub session_id: SessionId,
}

pub struct GetSummaryHandler {
    repository: Arc<dyn AssessmentSessionRepository>,
    catalog: Arc<ContentCatalog>,
}

impl GetSummaryHandler {
    pub fn new(
        repository: Arc<dyn AssessmentSessionRepository>,
        catalog: Arc<ContentCatalog>,
    ) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub async fn handle(&self, query: GetSummaryQuery) -> Result<Vec<DomainAverage>, AssessmentError> {
        let session = load_session(self.repository.as_ref(), &query.session_id).await?;
        Ok(domain_averages(&self.catalog, session.responses()))
    }
}
