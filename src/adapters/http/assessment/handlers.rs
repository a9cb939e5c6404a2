//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::assessment::{
    ClearSessionCommand, ClearSessionHandler, GetSessionHandler, GetSessionQuery,
    SubmitAssessmentCommand, SubmitAssessmentHandler,
};
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::{ErrorCode, SessionId};

use super::dto::{AssessmentResponse, ErrorResponse, SessionResponse, SubmitAssessmentRequest};

/// Shared handler state for the assessment routes.
#[derive(Clone)]
pub struct AssessmentHandlers {
    submit_handler: Arc<SubmitAssessmentHandler>,
    clear_handler: Arc<ClearSessionHandler>,
    get_handler: Arc<GetSessionHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        submit_handler: Arc<SubmitAssessmentHandler>,
        clear_handler: Arc<ClearSessionHandler>,
        get_handler: Arc<GetSessionHandler>,
    ) -> Self {
        Self {
            submit_handler,
            clear_handler,
            get_handler,
        }
    }
}

/// POST /api/assessments - Submit one assessment
pub async fn submit_assessment(
    State(handlers): State<AssessmentHandlers>,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Response {
    let cmd = SubmitAssessmentCommand {
        session_id: req.session_id,
        day_selection: req.day_type,
        work_hours: req.work_hours,
        screen_time_hours: req.screen_time_hours,
        meetings_count: req.meetings_count,
        breaks_taken: req.breaks_taken,
        after_hours_work: req.after_hours_work,
        sleep_hours: req.sleep_hours,
        task_completion_rate: req.task_completion_rate,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => {
            let response = AssessmentResponse::from_parts(&result.session, &result.outcome);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => assessment_error_response(e),
    }
}

/// POST /api/sessions/:id/clear - Clear a session
pub async fn clear_session(
    State(handlers): State<AssessmentHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .clear_handler
        .handle(ClearSessionCommand { session_id })
        .await
    {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => assessment_error_response(e),
    }
}

/// GET /api/sessions/:id - Read session state
pub async fn get_session(
    State(handlers): State<AssessmentHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .get_handler
        .handle(GetSessionQuery { session_id })
        .await
    {
        Ok(Some(session)) => {
            (StatusCode::OK, Json(SessionResponse::from(&session))).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session_id),
            )),
        )
            .into_response(),
        Err(e) => assessment_error_response(e),
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                ErrorCode::InvalidFormat,
                format!("'{}' is not a valid session id", raw),
            )),
        )
            .into_response()
    })
}

/// Maps workflow errors to HTTP statuses.
///
/// Missing selection is a blocking form-level condition (422); range and
/// format failures are bad requests (400); backend failures pass through
/// as 502 with the backend message intact.
fn assessment_error_response(err: AssessmentError) -> Response {
    let status = match &err {
        AssessmentError::MissingSelection => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentError::Validation(_) => StatusCode::BAD_REQUEST,
        AssessmentError::Prediction { .. } => StatusCode::BAD_GATEWAY,
        AssessmentError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        AssessmentError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = ErrorResponse::new(err.code(), err.to_string());
    (status, Json(body)).into_response()
}
