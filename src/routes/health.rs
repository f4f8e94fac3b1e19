//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK with the service identity
//! whenever the process can respond to HTTP.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "UP" while the process is serving
    pub status: String,
    /// Current time, RFC 3339 in UTC
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

/// Health check handler.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    summary = "Liveness probe",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse),
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: state.config.service.name.clone(),
        version: state.config.service.version.clone(),
    })
}
