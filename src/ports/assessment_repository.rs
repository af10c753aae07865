//! Assessment session repository port.
//!
//! Holds one `AssessmentSession` per `SessionId`. Sessions are independent;
//! the repository never shares state between them.

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{DomainError, SessionId};
use async_trait::async_trait;

/// Repository port for assessment session persistence.
#[async_trait]
pub trait AssessmentSessionRepository: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `StorageError` if a session with the same id already exists
    async fn save(&self, session: &AssessmentSession) -> Result<(), DomainError>;

    /// Replace an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    async fn update(&self, session: &AssessmentSession) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<AssessmentSession>, DomainError>;

    /// Destroy a session and everything recorded in it.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;
}
