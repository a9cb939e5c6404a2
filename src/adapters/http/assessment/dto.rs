//! Request and response DTOs for assessment endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{AssessmentOutcome, AssessmentSession, RiskBand, SessionPhase};
use crate::domain::foundation::{ErrorCode, SessionId};

/// POST /api/assessments request body.
///
/// `day_type` carries the raw form selection; the empty string is the
/// unselected sentinel. Numeric fields arrive unclamped and are validated
/// by the domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAssessmentRequest {
    #[serde(default)]
    pub session_id: Option<SessionId>,
    #[serde(default)]
    pub day_type: String,
    pub work_hours: f64,
    pub screen_time_hours: f64,
    pub meetings_count: u32,
    pub breaks_taken: u32,
    pub after_hours_work: f64,
    pub sleep_hours: f64,
    pub task_completion_rate: f64,
}

/// Successful prediction response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub session_id: SessionId,
    pub score: f64,
    /// Score formatted to two decimals, as shown in the result box.
    pub score_display: String,
    pub risk_band: RiskBand,
    /// Uppercase band label, e.g. "LOW RISK".
    pub risk_label: String,
    pub reset_generation: u64,
    pub phase: SessionPhase,
}

impl AssessmentResponse {
    pub fn from_parts(session: &AssessmentSession, outcome: &AssessmentOutcome) -> Self {
        Self {
            session_id: session.id(),
            score: outcome.score.value(),
            score_display: outcome.score.to_string(),
            risk_band: outcome.band,
            risk_label: outcome.band.label().to_string(),
            reset_generation: session.reset_generation(),
            phase: session.phase(),
        }
    }
}

/// Session state snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: SessionId,
    pub reset_generation: u64,
    pub phase: SessionPhase,
    pub last_result: Option<OutcomeDto>,
    pub created_at: String,
    pub updated_at: String,
}

/// Cached outcome inside a session snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeDto {
    pub score: f64,
    pub score_display: String,
    pub risk_band: RiskBand,
    pub risk_label: String,
}

impl From<&AssessmentOutcome> for OutcomeDto {
    fn from(outcome: &AssessmentOutcome) -> Self {
        Self {
            score: outcome.score.value(),
            score_display: outcome.score.to_string(),
            risk_band: outcome.band,
            risk_label: outcome.band.label().to_string(),
        }
    }
}

impl From<&AssessmentSession> for SessionResponse {
    fn from(session: &AssessmentSession) -> Self {
        Self {
            session_id: session.id(),
            reset_generation: session.reset_generation(),
            phase: session.phase(),
            last_result: session.last_result().map(OutcomeDto::from),
            created_at: session.created_at().to_string(),
            updated_at: session.updated_at().to_string(),
        }
    }
}

/// Error payload for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}
