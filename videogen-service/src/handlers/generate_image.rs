use super::ensure_method;
use crate::models::{GenerationResult, ImageGenerationRequest};
use crate::services::dispatcher;
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, http::Method, Json};
use service_core::error::AppError;

/// Animates an uploaded image: `{image, prompt?, model?}`.
///
/// Same order as text generation: method, credential, then the model and
/// image checks.
pub async fn generate_video_from_image(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Json<GenerationResult>, AppError> {
    ensure_method(&method, Method::POST)?;

    let request = ImageGenerationRequest::from_body(&body);

    let token = state.credentials.require().map_err(|e| {
        tracing::error!("Image generation requested without provider credential");
        e
    })?;

    let result =
        dispatcher::dispatch_image(&state.provider, state.image_model_map, &token, &request)
            .await?;

    Ok(Json(result))
}
