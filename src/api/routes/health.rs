//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::ApiState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Ready once the state lock can be taken for reading.
pub async fn readiness(State(state): State<Arc<ApiState>>) -> StatusCode {
    let _app = state.app.read().await;
    StatusCode::OK
}

/// GET /health
///
/// Full health status.
pub async fn full_health(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    let applications = state.app.read().await.store().len();

    Json(HealthResponse {
        status: "healthy".to_string(),
        applications,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
