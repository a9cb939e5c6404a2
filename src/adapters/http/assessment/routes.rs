//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{clear_session, get_session, submit_assessment, AssessmentHandlers};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/assessments", post(submit_assessment))
        .route("/sessions/:session_id", get(get_session))
        .route("/sessions/:session_id/clear", post(clear_session))
        .with_state(handlers)
}
