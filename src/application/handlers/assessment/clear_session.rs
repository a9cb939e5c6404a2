//! ClearSessionHandler - Command handler for the clear action.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentError, AssessmentSession};
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to clear a session.
#[derive(Debug, Clone)]
pub struct ClearSessionCommand {
    pub session_id: SessionId,
}

/// Handler for the clear action.
///
/// Clear performs no validation and succeeds from any phase: the reset
/// generation is bumped, the cached result dropped, and the session
/// returns to Idle. Clearing an unknown id starts a fresh session whose
/// first generation is already 1, so clients always observe a reset.
pub struct ClearSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl ClearSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: ClearSessionCommand,
    ) -> Result<AssessmentSession, AssessmentError> {
        let mut session = match self.store.load(cmd.session_id).await {
            Ok(session) => session,
            Err(SessionStoreError::NotFound(_)) => AssessmentSession::new(cmd.session_id),
            Err(e) => return Err(e.into()),
        };

        session.clear();
        self.store.save(&session).await?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::predictor::MockPredictor;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::handlers::assessment::{
        SubmitAssessmentCommand, SubmitAssessmentHandler,
    };
    use crate::domain::assessment::SessionPhase;

    #[tokio::test]
    async fn clear_after_a_result_resets_everything() {
        let store = InMemorySessionStore::new();
        let predictor = MockPredictor::new().with_score(90.0);
        let submit =
            SubmitAssessmentHandler::new(Arc::new(store.clone()), Arc::new(predictor));
        let clear = ClearSessionHandler::new(Arc::new(store.clone()));

        let id = SessionId::new();
        submit
            .handle(SubmitAssessmentCommand {
                session_id: Some(id),
                day_selection: "Weekday".to_string(),
                work_hours: 12.0,
                screen_time_hours: 10.0,
                meetings_count: 9,
                breaks_taken: 0,
                after_hours_work: 4.0,
                sleep_hours: 5.0,
                task_completion_rate: 60.0,
            })
            .await
            .unwrap();

        let session = clear
            .handle(ClearSessionCommand { session_id: id })
            .await
            .unwrap();

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.reset_generation(), 1);
        assert!(session.last_result().is_none());
    }

    #[tokio::test]
    async fn clear_of_unknown_session_still_succeeds() {
        let store = InMemorySessionStore::new();
        let clear = ClearSessionHandler::new(Arc::new(store.clone()));

        let id = SessionId::new();
        let session = clear
            .handle(ClearSessionCommand { session_id: id })
            .await
            .unwrap();

        assert_eq!(session.reset_generation(), 1);
        assert!(store.exists(id).await.unwrap());
    }

    #[tokio::test]
    async fn repeated_clears_keep_counting() {
        let store = InMemorySessionStore::new();
        let clear = ClearSessionHandler::new(Arc::new(store.clone()));
        let id = SessionId::new();

        for _ in 0..3 {
            clear
                .handle(ClearSessionCommand { session_id: id })
                .await
                .unwrap();
        }

        let session = store.load(id).await.unwrap();
        assert_eq!(session.reset_generation(), 3);
    }
}
