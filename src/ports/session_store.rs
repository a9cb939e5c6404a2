//! Session Store Port - Interface for keeping per-session workflow state.
//!
//! Session state is never persisted beyond the session itself, but the
//! port keeps storage swappable for tests and future backends.

use async_trait::async_trait;

use crate::domain::assessment::{AssessmentError, AssessmentSession};
use crate::domain::foundation::SessionId;

/// Errors that can occur during session store operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Session store backend failure: {0}")]
    Backend(String),
}

impl From<SessionStoreError> for AssessmentError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => AssessmentError::SessionNotFound(id),
            SessionStoreError::Backend(message) => AssessmentError::Store { message },
        }
    }
}

/// Port for saving and loading assessment sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Saves a session, replacing any previous state for its id.
    async fn save(&self, session: &AssessmentSession) -> Result<(), SessionStoreError>;

    /// Loads a session.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::NotFound` if no session exists.
    async fn load(&self, id: SessionId) -> Result<AssessmentSession, SessionStoreError>;

    /// Checks if a session exists.
    async fn exists(&self, id: SessionId) -> Result<bool, SessionStoreError>;

    /// Deletes a session. Deleting an absent session is not an error.
    async fn delete(&self, id: SessionId) -> Result<(), SessionStoreError>;
}
