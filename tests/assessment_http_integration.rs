//! Integration tests for the assessment HTTP endpoints.
//!
//! These verify the HTTP layer wiring:
//! 1. Request DTOs deserialize correctly
//! 2. Handlers map workflow outcomes and errors to statuses and bodies
//! 3. Responses serialize the shape clients render from

use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde_json::{json, Value};

use burnout_ai::adapters::http::assessment::dto::SubmitAssessmentRequest;
use burnout_ai::adapters::http::assessment::handlers::{
    clear_session, get_session, submit_assessment, AssessmentHandlers,
};
use burnout_ai::adapters::predictor::MockPredictor;
use burnout_ai::adapters::storage::InMemorySessionStore;
use burnout_ai::application::handlers::assessment::{
    ClearSessionHandler, GetSessionHandler, SubmitAssessmentHandler,
};
use burnout_ai::domain::foundation::SessionId;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn handlers_with(predictor: MockPredictor) -> AssessmentHandlers {
    let store = Arc::new(InMemorySessionStore::new());
    AssessmentHandlers::new(
        Arc::new(SubmitAssessmentHandler::new(
            store.clone(),
            Arc::new(predictor),
        )),
        Arc::new(ClearSessionHandler::new(store.clone())),
        Arc::new(GetSessionHandler::new(store)),
    )
}

fn submit_request(day_type: &str) -> SubmitAssessmentRequest {
    serde_json::from_value(json!({
        "day_type": day_type,
        "work_hours": 8.0,
        "screen_time_hours": 6.0,
        "meetings_count": 4,
        "breaks_taken": 2,
        "after_hours_work": 1.0,
        "sleep_hours": 7.0,
        "task_completion_rate": 85.0
    }))
    .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Submit
// =============================================================================

#[tokio::test]
async fn submit_returns_score_band_and_display() {
    let handlers = handlers_with(MockPredictor::new().with_score(35.0));

    let response =
        submit_assessment(State(handlers), Json(submit_request("Weekday"))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["score_display"], "35.00");
    assert_eq!(body["risk_band"], "low");
    assert_eq!(body["risk_label"], "LOW RISK");
    assert_eq!(body["phase"], "resulted");
    assert_eq!(body["reset_generation"], 0);
}

#[tokio::test]
async fn submit_without_day_type_is_unprocessable() {
    let handlers = handlers_with(MockPredictor::new().with_score(35.0));

    let response = submit_assessment(State(handlers), Json(submit_request(""))).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["code"], "MISSING_SELECTION");
}

#[tokio::test]
async fn submit_with_out_of_range_field_is_bad_request() {
    let handlers = handlers_with(MockPredictor::new());

    let mut request = submit_request("Weekday");
    request.work_hours = 30.0;
    let response = submit_assessment(State(handlers), Json(request)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "OUT_OF_RANGE");
    assert!(body["message"].as_str().unwrap().contains("work_hours"));
}

#[tokio::test]
async fn backend_failure_is_bad_gateway_with_message() {
    let handlers = handlers_with(MockPredictor::new().with_failure("model artifact missing"));

    let response =
        submit_assessment(State(handlers), Json(submit_request("Weekday"))).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = body_json(response).await;
    assert_eq!(body["code"], "PREDICTION_FAILED");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("model artifact missing"));
}

// =============================================================================
// Session reads and clear
// =============================================================================

#[tokio::test]
async fn clear_then_get_shows_a_reset_session() {
    let handlers = handlers_with(MockPredictor::new().with_score(90.0));

    let response = submit_assessment(
        State(handlers.clone()),
        Json(submit_request("Weekday")),
    )
    .await;
    let session_id = body_json(response).await["session_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response =
        clear_session(State(handlers.clone()), Path(session_id.clone())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["reset_generation"], 1);
    assert_eq!(body["phase"], "idle");
    assert!(body["last_result"].is_null());

    let response = get_session(State(handlers), Path(session_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["phase"], "idle");
}

#[tokio::test]
async fn get_of_unknown_session_is_not_found() {
    let handlers = handlers_with(MockPredictor::new());

    let response = get_session(State(handlers), Path(SessionId::new().to_string())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "SESSION_NOT_FOUND");
}

#[tokio::test]
async fn malformed_session_id_is_bad_request() {
    let handlers = handlers_with(MockPredictor::new());

    let response = get_session(State(handlers), Path("not-a-uuid".to_string())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn session_snapshot_carries_the_cached_result() {
    let handlers = handlers_with(MockPredictor::new().with_score(55.0));

    let response = submit_assessment(
        State(handlers.clone()),
        Json(submit_request("Weekend")),
    )
    .await;
    let session_id = body_json(response).await["session_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = get_session(State(handlers), Path(session_id)).await;
    let body = body_json(response).await;
    assert_eq!(body["last_result"]["score_display"], "55.00");
    assert_eq!(body["last_result"]["risk_band"], "medium");
    assert_eq!(body["last_result"]["risk_label"], "MEDIUM RISK");
}
