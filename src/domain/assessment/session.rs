//! Assessment session aggregate.
//!
//! One session is one user's pass through the four wizard steps. It owns the
//! current step and the response store, and nothing else: no state is shared
//! between sessions.

use crate::domain::catalog::{CompetencyKey, ContentCatalog, ResponseKey};
use crate::domain::foundation::{Rating, SessionId, Timestamp};

use super::{AssessmentError, ResponseStore, WizardStep};

/// Assessment session aggregate.
///
/// # Invariants
///
/// - `step` is always one of the four wizard steps
/// - responses only reference keys present in the catalog they were recorded against
/// - `reset` returns to the first step with an empty store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentSession {
    id: SessionId,
    step: WizardStep,
    responses: ResponseStore,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AssessmentSession {
    /// Starts a new session on the first step.
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            step: WizardStep::FIRST,
            responses: ResponseStore::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves to the next step; stays put on the report step.
    pub fn advance(&mut self) -> WizardStep {
        self.move_to(self.step.advance())
    }

    /// Moves to the previous step; stays put on the first step.
    pub fn retreat(&mut self) -> WizardStep {
        self.move_to(self.step.retreat())
    }

    /// Starts over: first step, every response discarded.
    pub fn reset(&mut self) {
        self.step = WizardStep::FIRST;
        self.responses.clear();
        self.touch();
    }

    fn move_to(&mut self, target: WizardStep) -> WizardStep {
        if target != self.step {
            self.step = target;
            self.touch();
        }
        self.step
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Responses
    // ─────────────────────────────────────────────────────────────────────────

    /// Records a rating for a catalog item.
    ///
    /// # Errors
    ///
    /// - `UnknownCompetency` if the key is not in `catalog`
    pub fn record_rating(
        &mut self,
        catalog: &ContentCatalog,
        key: CompetencyKey,
        rating: Rating,
    ) -> Result<(), AssessmentError> {
        if !catalog.contains_item(&key) {
            return Err(AssessmentError::UnknownCompetency(key));
        }
        self.responses.set_rating(key, rating);
        self.touch();
        Ok(())
    }

    /// Records a free-text answer for a catalog question.
    ///
    /// # Errors
    ///
    /// - `UnknownQuestion` if the key is not in `catalog`
    pub fn record_text(
        &mut self,
        catalog: &ContentCatalog,
        key: ResponseKey,
        text: String,
    ) -> Result<(), AssessmentError> {
        if !catalog.contains_question(&key) {
            return Err(AssessmentError::UnknownQuestion(key));
        }
        self.responses.set_text(key, text);
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CompetencyDomain::*;

    fn catalog() -> &'static ContentCatalog {
        ContentCatalog::standard()
    }

    fn filled_session() -> AssessmentSession {
        let mut session = AssessmentSession::new(SessionId::new());
        session
            .record_rating(catalog(), CompetencyKey::new(EmotionalIntelligence, 0), Rating::Expert)
            .unwrap();
        session
            .record_text(
                catalog(),
                ResponseKey::qualitative(PatientCenteredLeadership, 1),
                "Daily huddles".to_string(),
            )
            .unwrap();
        session
            .record_text(catalog(), ResponseKey::reflection(0), String::new())
            .unwrap();
        session
    }

    #[test]
    fn new_session_starts_on_first_step_with_no_responses() {
        let session = AssessmentSession::new(SessionId::new());
        assert_eq!(session.step(), WizardStep::Quantitative);
        assert!(session.responses().is_empty());
    }

    #[test]
    fn advance_clamps_at_report() {
        let mut session = AssessmentSession::new(SessionId::new());
        for _ in 0..5 {
            session.advance();
        }
        assert_eq!(session.step(), WizardStep::Report);
    }

    #[test]
    fn retreat_clamps_at_first_step() {
        let mut session = AssessmentSession::new(SessionId::new());
        assert_eq!(session.retreat(), WizardStep::Quantitative);
    }

    #[test]
    fn reset_clears_responses_and_step() {
        let mut session = filled_session();
        session.advance();
        session.advance();

        session.reset();

        assert_eq!(session.step(), WizardStep::Quantitative);
        let store = session.responses();
        assert_eq!(store.rating(&CompetencyKey::new(EmotionalIntelligence, 0)), None);
        assert_eq!(
            store.text(&ResponseKey::qualitative(PatientCenteredLeadership, 1)),
            None
        );
        assert_eq!(store.text(&ResponseKey::reflection(0)), None);
    }

    #[test]
    fn record_rating_rejects_unknown_item() {
        let mut session = AssessmentSession::new(SessionId::new());
        let key = CompetencyKey::new(PatientCenteredLeadership, 3);
        let result = session.record_rating(catalog(), key, Rating::Competent);
        assert_eq!(result, Err(AssessmentError::UnknownCompetency(key)));
        assert!(session.responses().is_empty());
    }

    #[test]
    fn record_text_rejects_unknown_question() {
        let mut session = AssessmentSession::new(SessionId::new());
        let key = ResponseKey::reflection(5);
        let result = session.record_text(catalog(), key, "x".to_string());
        assert_eq!(result, Err(AssessmentError::UnknownQuestion(key)));
    }

    #[test]
    fn recording_updates_timestamp() {
        let mut session = AssessmentSession::new(SessionId::new());
        let before = *session.updated_at();
        std::thread::sleep(std::time::Duration::from_millis(5));
        session
            .record_rating(catalog(), CompetencyKey::new(StrategicDecisionMaking, 2), Rating::Novice)
            .unwrap();
        assert!(session.updated_at().is_after(&before));
    }
}
