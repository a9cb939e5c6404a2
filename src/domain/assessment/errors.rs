//! Error taxonomy for the assessment workflow.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, SessionId, ValidationError};

/// Errors produced by the intake-and-classify workflow.
///
/// None of these are fatal: every variant leaves the session re-enterable,
/// and the caller may correct the input or simply retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    /// The required day type selection was left at the unselected sentinel.
    /// Blocks submission locally; the predictor is never invoked.
    #[error("Day type must be selected before submission")]
    MissingSelection,

    /// A field failed domain validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The prediction backend failed. The underlying message is carried
    /// verbatim and surfaced to the caller without further classification.
    #[error("Prediction failed: {message}")]
    Prediction { message: String },

    /// No session exists for the given id.
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    /// The session store failed outside of a plain miss.
    #[error("Session store failure: {message}")]
    Store { message: String },
}

impl AssessmentError {
    /// Creates a prediction error wrapping a backend message verbatim.
    pub fn prediction(message: impl Into<String>) -> Self {
        AssessmentError::Prediction {
            message: message.into(),
        }
    }

    /// The display code for the HTTP boundary.
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::MissingSelection => ErrorCode::MissingSelection,
            AssessmentError::Validation(ValidationError::OutOfRange { .. }) => {
                ErrorCode::OutOfRange
            }
            AssessmentError::Validation(_) => ErrorCode::ValidationFailed,
            AssessmentError::Prediction { .. } => ErrorCode::PredictionFailed,
            AssessmentError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            AssessmentError::Store { .. } => ErrorCode::StoreError,
        }
    }
}
