//! Health check endpoint

use axum::Json;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Liveness probe - is the service running?
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "running",
        message: "Voice Assistant Backend is Online",
    })
}
