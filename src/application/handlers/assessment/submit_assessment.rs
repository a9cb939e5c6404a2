//! SubmitAssessmentHandler - Command handler for one intake submission.

use std::sync::Arc;

use crate::domain::assessment::{
    AssessmentError, AssessmentOutcome, AssessmentRecord, AssessmentSession, BurnoutScore,
    DayType,
};
use crate::domain::foundation::SessionId;
use crate::ports::{BurnoutPredictor, SessionStore, SessionStoreError};

/// Command carrying the raw form values of one submission.
///
/// `day_selection` arrives as the raw selection string; the empty sentinel
/// is a validation-blocking state and never reaches the predictor.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    /// Session to submit into; a fresh session is created when absent.
    pub session_id: Option<SessionId>,
    pub day_selection: String,
    pub work_hours: f64,
    pub screen_time_hours: f64,
    pub meetings_count: u32,
    pub breaks_taken: u32,
    pub after_hours_work: f64,
    pub sleep_hours: f64,
    pub task_completion_rate: f64,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentResult {
    pub session: AssessmentSession,
    pub outcome: AssessmentOutcome,
}

/// Handler for submissions.
pub struct SubmitAssessmentHandler {
    store: Arc<dyn SessionStore>,
    predictor: Arc<dyn BurnoutPredictor>,
}

impl SubmitAssessmentHandler {
    pub fn new(store: Arc<dyn SessionStore>, predictor: Arc<dyn BurnoutPredictor>) -> Self {
        Self { store, predictor }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<SubmitAssessmentResult, AssessmentError> {
        // 1. Load the session, or start one on first contact.
        let session_id = cmd.session_id.unwrap_or_else(SessionId::new);
        let mut session = match self.store.load(session_id).await {
            Ok(session) => session,
            Err(SessionStoreError::NotFound(_)) => AssessmentSession::new(session_id),
            Err(e) => return Err(e.into()),
        };

        // 2. Resolve the categorical selection. Failure here blocks the
        //    submission locally; the predictor is never invoked.
        let day_type = match DayType::from_selection(&cmd.day_selection) {
            Ok(day_type) => day_type,
            Err(err) => return self.fail(session, err).await,
        };

        // 3. Validate numeric domains and assemble the record.
        let record = match AssessmentRecord::try_new(
            day_type,
            cmd.work_hours,
            cmd.screen_time_hours,
            cmd.meetings_count,
            cmd.breaks_taken,
            cmd.after_hours_work,
            cmd.sleep_hours,
            cmd.task_completion_rate,
        ) {
            Ok(record) => record,
            Err(err) => return self.fail(session, err.into()).await,
        };

        // 4. Materialize the single-row tabular input and call the backend.
        session.begin_submission()?;
        let frame = record.to_feature_frame()?;
        let scores = match self.predictor.predict(&frame).await {
            Ok(scores) => scores,
            Err(err) => {
                return self
                    .fail(session, AssessmentError::prediction(err.to_string()))
                    .await
            }
        };

        // 5. The score is element 0 of the returned sequence; an empty
        //    sequence is a backend contract violation.
        let raw_score = match scores.first() {
            Some(value) => *value,
            None => {
                return self
                    .fail(
                        session,
                        AssessmentError::prediction("backend returned no scores"),
                    )
                    .await
            }
        };
        let score = match BurnoutScore::try_new(raw_score) {
            Ok(score) => score,
            Err(_) => {
                return self
                    .fail(
                        session,
                        AssessmentError::prediction(format!(
                            "backend returned a non-finite score: {}",
                            raw_score
                        )),
                    )
                    .await
            }
        };

        // 6. Classify, cache, persist.
        let outcome = AssessmentOutcome::new(score, score.band());
        session.record_result(outcome.clone())?;
        self.store.save(&session).await?;

        Ok(SubmitAssessmentResult { session, outcome })
    }

    /// Moves the session to the Errored phase, persists it, and returns
    /// the error. The cached result and the caller's form stay intact.
    async fn fail(
        &self,
        mut session: AssessmentSession,
        err: AssessmentError,
    ) -> Result<SubmitAssessmentResult, AssessmentError> {
        session.record_failure();
        self.store.save(&session).await?;
        Err(err)
    }
}
