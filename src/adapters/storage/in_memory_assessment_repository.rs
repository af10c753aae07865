//! In-Memory Assessment Repository
//!
//! Keeps every live session in a process-local map. Nothing is persisted;
//! a session is gone once it is deleted, sits idle past the configured
//! timeout, or the process exits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::AssessmentSessionRepository;

/// Idle timeout used when none is configured.
const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
struct StoredSession {
    session: AssessmentSession,
    last_written: Instant,
}

impl StoredSession {
    fn new(session: &AssessmentSession) -> Self {
        Self {
            session: session.clone(),
            last_written: Instant::now(),
        }
    }

    fn is_idle(&self, idle_timeout: Duration, now: Instant) -> bool {
        now.duration_since(self.last_written) >= idle_timeout
    }
}

/// In-memory storage for assessment sessions
///
/// A session that has not been saved or updated within the idle timeout
/// is no longer found, and is dropped from the map on the next write.
#[derive(Debug, Clone)]
pub struct InMemoryAssessmentRepository {
    sessions: Arc<RwLock<HashMap<SessionId, StoredSession>>>,
    idle_timeout: Duration,
}

impl Default for InMemoryAssessmentRepository {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl InMemoryAssessmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Number of sessions held in memory, idle ones not yet swept included.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every idle session and returns how many were removed.
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions)
    }

    fn sweep(&self, sessions: &mut HashMap<SessionId, StoredSession>) -> usize {
        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|_, stored| !stored.is_idle(self.idle_timeout, now));
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = sessions.len(), "Evicted idle assessment sessions");
        }
        evicted
    }
}

fn not_found(id: &SessionId) -> DomainError {
    DomainError::new(
        ErrorCode::SessionNotFound,
        format!("Assessment session not found: {}", id),
    )
    .with_detail("session_id", id.to_string())
}

#[async_trait]
impl AssessmentSessionRepository for InMemoryAssessmentRepository {
    async fn save(&self, session: &AssessmentSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions);
        if sessions.contains_key(session.id()) {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Assessment session already exists: {}", session.id()),
            ));
        }
        sessions.insert(*session.id(), StoredSession::new(session));
        Ok(())
    }

    async fn update(&self, session: &AssessmentSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions);
        match sessions.get_mut(session.id()) {
            Some(existing) => {
                *existing = StoredSession::new(session);
                Ok(())
            }
            None => Err(not_found(session.id())),
        }
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<AssessmentSession>, DomainError> {
        let now = Instant::now();
        Ok(self
            .sessions
            .read()
            .await
            .get(id)
            .filter(|stored| !stored.is_idle(self.idle_timeout, now))
            .map(|stored| stored.session.clone()))
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions);
        sessions.remove(id).map(|_| ()).ok_or_else(|| not_found(id))
    }
}
