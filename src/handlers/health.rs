use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Service name reported by the liveness payload.
pub const SERVICE_NAME: &str = "onyxs-backend";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

/// Liveness check endpoint
///
/// Always succeeds; does not touch the database.
#[tracing::instrument]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: SERVICE_NAME.to_string(),
    })
}
