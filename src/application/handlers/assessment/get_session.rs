//! GetSessionHandler - Query handler for reading session state.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentError, AssessmentSession};
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// Query for one session's state.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for session reads.
pub struct GetSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetSessionQuery,
    ) -> Result<Option<AssessmentSession>, AssessmentError> {
        match self.store.load(query.session_id).await {
            Ok(session) => Ok(Some(session)),
            Err(SessionStoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
