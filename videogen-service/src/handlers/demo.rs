use super::ensure_method;
use crate::models::{iso_timestamp, prompt_len, GenerationRequest, GenerationResult};
use axum::{body::Bytes, http::Method, Json};
use chrono::Utc;
use service_core::error::AppError;

pub const DEMO_VIDEO_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";
const DEMO_PROMPT: &str = "Test prompt";
const DEMO_LABEL: &str = "demo";

/// Returns a fixed sample video so the UI can be exercised without a
/// provider token.
pub async fn test_video(method: Method, body: Bytes) -> Result<Json<GenerationResult>, AppError> {
    ensure_method(&method, Method::POST)?;

    let request = GenerationRequest::from_body(&body);
    let prompt = request
        .prompt
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEMO_PROMPT);

    tracing::info!(prompt_len = prompt_len(prompt), "Serving demo video");

    Ok(Json(GenerationResult {
        video_url: DEMO_VIDEO_URL.to_string(),
        prompt: prompt.to_string(),
        enhanced_prompt: request.enhanced_prompt(prompt),
        model: DEMO_LABEL.to_string(),
        timestamp: iso_timestamp(Utc::now()),
        service: DEMO_LABEL.to_string(),
    }))
}
