//! HTTP adapter - axum router composition.

pub mod assessment;

use std::time::Duration;

use axum::{http::HeaderValue, routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use self::assessment::{assessment_routes, AssessmentHandlers};

/// Builds the application router: assessment API under `/api`, a liveness
/// probe, and the cross-cutting layers (trace, CORS, request timeout).
pub fn app_router(handlers: AssessmentHandlers, config: &ServerConfig) -> Router {
    let cors = match cors_origins(config) {
        Some(origins) => CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Router::new()
        .nest("/api", assessment_routes(handlers))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.request_timeout_secs,
                ))),
        )
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_origins(config: &ServerConfig) -> Option<Vec<HeaderValue>> {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    if origins.is_empty() {
        None
    } else {
        Some(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::predictor::MockPredictor;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::handlers::assessment::{
        ClearSessionHandler, GetSessionHandler, SubmitAssessmentHandler,
    };
    use std::sync::Arc;

    #[test]
    fn app_router_compiles_with_default_config() {
        let store = Arc::new(InMemorySessionStore::new());
        let predictor = Arc::new(MockPredictor::new());
        let handlers = AssessmentHandlers::new(
            Arc::new(SubmitAssessmentHandler::new(store.clone(), predictor)),
            Arc::new(ClearSessionHandler::new(store.clone())),
            Arc::new(GetSessionHandler::new(store)),
        );
        let _router = app_router(handlers, &ServerConfig::default());
    }
}
