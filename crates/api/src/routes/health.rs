use axum::extract::State;
use axum::{routing::get, Json, Router};
use projectbank_db::repositories::ProjectRepo;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of projects currently held in the store.
    pub project_count: usize,
}

/// Ping response payload.
#[derive(Serialize)]
pub struct PingResponse {
    pub message: String,
}

/// GET /health -- returns service status and store size.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let project_count = ProjectRepo::count(&state.pool).await;

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        project_count,
    })
}

/// GET /api/ping -- returns the configured ping message.
async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    Json(PingResponse {
        message: state.config.ping_message.clone(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Mount the ping route (nested under `/api`).
pub fn ping_router() -> Router<AppState> {
    Router::new().route("/ping", get(ping))
}
