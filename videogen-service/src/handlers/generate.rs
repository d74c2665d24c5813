use super::ensure_method;
use crate::models::{GenerationRequest, GenerationResult};
use crate::services::dispatcher;
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, http::Method, Json};
use service_core::error::AppError;

/// Generates a video from `{prompt, model?}`.
///
/// Checks run in a fixed order: method, credential, prompt. A missing
/// credential is reported even when the prompt is also invalid.
pub async fn generate_video(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Json<GenerationResult>, AppError> {
    ensure_method(&method, Method::POST)?;

    let request = GenerationRequest::from_body(&body);

    let token = state.credentials.require().map_err(|e| {
        tracing::error!("Generation requested without provider credential");
        e
    })?;

    let result = dispatcher::dispatch(&state.provider, state.model_map, &token, &request).await?;

    Ok(Json(result))
}
