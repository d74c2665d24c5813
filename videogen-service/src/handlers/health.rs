use super::ensure_method;
use crate::models::iso_timestamp;
use crate::startup::AppState;
use axum::{extract::State, http::Method, Json};
use chrono::Utc;
use serde::Serialize;
use service_core::error::AppError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// `"replicate"` when a provider token is configured, else `"none"`.
    pub provider: &'static str,
    pub timestamp: String,
}

pub async fn health_check(
    State(state): State<AppState>,
    method: Method,
) -> Result<Json<HealthResponse>, AppError> {
    ensure_method(&method, Method::GET)?;

    let provider = if state.credentials.is_configured() {
        "replicate"
    } else {
        "none"
    };

    Ok(Json(HealthResponse {
        status: "healthy",
        provider,
        timestamp: iso_timestamp(Utc::now()),
    }))
}
