//! NavigateAssessmentHandler - Command handler for wizard navigation.
//!
//! Moves are clamped silently at either end; reset starts the session over
//! with every response discarded.

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::domain::assessment::{AssessmentError, AssessmentSession};
use crate::domain::foundation::SessionId;
use crate::ports::AssessmentSessionRepository;

use super::load_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    Advance,
    Retreat,
    Reset,
}

#[derive(Debug, Clone)]
pub struct NavigateAssessmentCommand {
    pub session_id: SessionId,
    pub navigation: Navigation,
}

pub struct NavigateAssessmentHandler {
    repository: Arc<dyn AssessmentSessionRepository>,
}

impl NavigateAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: NavigateAssessmentCommand,
    ) -> Result<AssessmentSession, AssessmentError> {
        let mut session = load_session(self.repository.as_ref(), &cmd.session_id).await?;
        let from = session.step();

        match cmd.navigation {
            Navigation::Advance => {
                session.advance();
            }
            Navigation::Retreat => {
                session.retreat();
            }
            Navigation::Reset => session.reset(),
        }
        self.repository.update(&session).await?;

        debug!(
            session_id = %cmd.session_id,
            navigation = ?cmd.navigation,
            from = from.as_u8(),
            to = session.step().as_u8(),
            "Wizard step changed"
        );
        Ok(session)
    }
}
