//! In-memory session store.
//!
//! Sessions are process-lifetime only: no assessment state survives the
//! service.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for assessment sessions.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, AssessmentSession>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops all stored sessions (useful for tests).
    pub async fn clear_all(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: &AssessmentSession) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn load(&self, id: SessionId) -> Result<AssessmentSession, SessionStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(id))
    }

    async fn exists(&self, id: SessionId) -> Result<bool, SessionStoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.contains_key(&id))
    }

    async fn delete(&self, id: SessionId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(&id);
        Ok(())
    }
}
