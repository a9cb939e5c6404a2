//! Burnout AI service binary.
//!
//! Loads configuration, wires the predictor and session store into the
//! assessment handlers, and serves the HTTP API.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use burnout_ai::adapters::http::{app_router, assessment::AssessmentHandlers};
use burnout_ai::adapters::predictor::LinearModelPredictor;
use burnout_ai::adapters::storage::InMemorySessionStore;
use burnout_ai::application::handlers::assessment::{
    ClearSessionHandler, GetSessionHandler, SubmitAssessmentHandler,
};
use burnout_ai::config::AppConfig;
use burnout_ai::ports::BurnoutPredictor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone()));
    if config.server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let predictor = Arc::new(
        LinearModelPredictor::from_path(&config.model.artifact_path)
            .context("failed to load model artifact")?,
    );
    let store = Arc::new(InMemorySessionStore::new());

    let handlers = AssessmentHandlers::new(
        Arc::new(SubmitAssessmentHandler::new(
            store.clone(),
            predictor.clone(),
        )),
        Arc::new(ClearSessionHandler::new(store.clone())),
        Arc::new(GetSessionHandler::new(store)),
    );

    let app = app_router(handlers, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(
        %addr,
        model = %predictor.model_info().name,
        "burnout-ai listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
