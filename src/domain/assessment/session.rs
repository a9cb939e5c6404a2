//! AssessmentSession aggregate.
//!
//! Each session owns its own state; there is no process-wide singleton.
//! Clients watch `reset_generation` to know when to re-render the form
//! with fresh defaults.

use serde::{Deserialize, Serialize};

use super::{BurnoutScore, RiskBand};
use crate::domain::foundation::{SessionId, Timestamp, ValidationError};

/// Workflow phase of a session.
///
/// Valid transitions:
/// - Idle/Resulted/Errored -> Submitted (a new submission passed validation)
/// - Submitted -> Resulted (prediction succeeded)
/// - any -> Errored (validation or prediction error displayed)
/// - any -> Idle (clear)
///
/// There is no terminal phase; the workflow is re-enterable indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Idle,
    Submitted,
    Resulted,
    Errored,
}

impl SessionPhase {
    /// Validates a transition from this phase to another.
    pub fn can_transition_to(&self, target: &SessionPhase) -> bool {
        use SessionPhase::*;
        match target {
            // Clear and error display are accepted from anywhere.
            Idle | Errored => true,
            Submitted => matches!(self, Idle | Resulted | Errored),
            Resulted => matches!(self, Submitted),
        }
    }

    /// Performs the transition, returning error if invalid.
    pub fn transition_to(&self, target: SessionPhase) -> Result<SessionPhase, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "session_phase",
                format!("cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }
}

/// Outcome of one successful prediction: the score, its band, and when it
/// was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub score: BurnoutScore,
    pub band: RiskBand,
    pub recorded_at: Timestamp,
}

impl AssessmentOutcome {
    /// Creates an outcome stamped with the current time.
    pub fn new(score: BurnoutScore, band: RiskBand) -> Self {
        Self {
            score,
            band,
            recorded_at: Timestamp::now(),
        }
    }
}

/// Per-session state of the intake-and-classify workflow.
///
/// # Invariants
///
/// - `reset_generation` starts at 0 and only ever increments, once per clear
/// - `last_result` holds the most recent successful prediction and is only
///   dropped by clear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    id: SessionId,
    reset_generation: u64,
    phase: SessionPhase,
    last_result: Option<AssessmentOutcome>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AssessmentSession {
    /// Creates a fresh session in the Idle phase with generation 0.
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            reset_generation: 0,
            phase: SessionPhase::Idle,
            last_result: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn reset_generation(&self) -> u64 {
        self.reset_generation
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn last_result(&self) -> Option<&AssessmentOutcome> {
        self.last_result.as_ref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Marks a validated submission as in flight.
    ///
    /// # Errors
    ///
    /// Invalid transition if a submission is already in flight.
    pub fn begin_submission(&mut self) -> Result<(), ValidationError> {
        self.phase = self.phase.transition_to(SessionPhase::Submitted)?;
        self.touch();
        Ok(())
    }

    /// Records a successful prediction and caches it as the last result.
    ///
    /// # Errors
    ///
    /// Invalid transition unless a submission is in flight.
    pub fn record_result(&mut self, outcome: AssessmentOutcome) -> Result<(), ValidationError> {
        self.phase = self.phase.transition_to(SessionPhase::Resulted)?;
        self.last_result = Some(outcome);
        self.touch();
        Ok(())
    }

    /// Records a validation or prediction failure.
    ///
    /// The cached last result stays untouched; the form remains intact and
    /// the session accepts the next submission without a clear.
    pub fn record_failure(&mut self) {
        self.phase = SessionPhase::Errored;
        self.touch();
    }

    /// Clears the session: bumps the reset generation, drops the cached
    /// result, and returns to Idle. Always succeeds, from any phase.
    pub fn clear(&mut self) {
        self.reset_generation += 1;
        self.last_result = None;
        self.phase = SessionPhase::Idle;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(score: f64) -> AssessmentOutcome {
        AssessmentOutcome::new(
            BurnoutScore::try_new(score).unwrap(),
            RiskBand::classify(score),
        )
    }

    #[test]
    fn new_session_is_idle_at_generation_zero() {
        let session = AssessmentSession::new(SessionId::new());
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.reset_generation(), 0);
        assert!(session.last_result().is_none());
    }

    #[test]
    fn successful_cycle_walks_idle_submitted_resulted() {
        let mut session = AssessmentSession::new(SessionId::new());

        session.begin_submission().unwrap();
        assert_eq!(session.phase(), SessionPhase::Submitted);

        session.record_result(outcome(35.0)).unwrap();
        assert_eq!(session.phase(), SessionPhase::Resulted);
        assert_eq!(session.last_result().unwrap().band, RiskBand::Low);
    }

    #[test]
    fn record_result_requires_a_submission_in_flight() {
        let mut session = AssessmentSession::new(SessionId::new());
        assert!(session.record_result(outcome(35.0)).is_err());
    }

    #[test]
    fn begin_submission_fails_while_already_in_flight() {
        let mut session = AssessmentSession::new(SessionId::new());
        session.begin_submission().unwrap();
        assert!(session.begin_submission().is_err());
    }

    #[test]
    fn workflow_is_reenterable_after_a_result() {
        let mut session = AssessmentSession::new(SessionId::new());
        session.begin_submission().unwrap();
        session.record_result(outcome(35.0)).unwrap();

        session.begin_submission().unwrap();
        session.record_result(outcome(90.0)).unwrap();
        assert_eq!(session.last_result().unwrap().band, RiskBand::High);
    }

    #[test]
    fn failure_keeps_the_cached_result() {
        let mut session = AssessmentSession::new(SessionId::new());
        session.begin_submission().unwrap();
        session.record_result(outcome(55.0)).unwrap();

        session.record_failure();
        assert_eq!(session.phase(), SessionPhase::Errored);
        assert_eq!(session.last_result().unwrap().band, RiskBand::Medium);
    }

    #[test]
    fn errored_session_accepts_the_next_submission() {
        let mut session = AssessmentSession::new(SessionId::new());
        session.record_failure();
        assert!(session.begin_submission().is_ok());
    }

    #[test]
    fn clear_resets_from_any_phase() {
        let mut session = AssessmentSession::new(SessionId::new());
        session.begin_submission().unwrap();
        session.record_result(outcome(80.0)).unwrap();

        session.clear();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.reset_generation(), 1);
        assert!(session.last_result().is_none());
    }

    #[test]
    fn each_clear_bumps_the_generation() {
        let mut session = AssessmentSession::new(SessionId::new());
        session.clear();
        session.clear();
        session.clear();
        assert_eq!(session.reset_generation(), 3);
    }

    #[test]
    fn phase_transition_matrix_is_consistent() {
        use SessionPhase::*;
        for phase in [Idle, Submitted, Resulted, Errored] {
            assert!(phase.can_transition_to(&Idle));
            assert!(phase.can_transition_to(&Errored));
        }
        assert!(!Submitted.can_transition_to(&Submitted));
        assert!(!Idle.can_transition_to(&Resulted));
        assert!(!Errored.can_transition_to(&Resulted));
    }

    #[test]
    fn session_round_trips_through_json() {
        let mut session = AssessmentSession::new(SessionId::new());
        session.begin_submission().unwrap();
        session.record_result(outcome(42.0)).unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let restored: AssessmentSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, restored);
    }
}
