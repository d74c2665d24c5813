//! Validation, model resolution and provider invocation for a single
//! generation request.

use crate::models::{
    iso_timestamp, prompt_len, GenerationRequest, GenerationResult, ImageGenerationRequest,
    ImagePayload,
};
use crate::services::metrics::{record_generation, GenerationOutcome};
use crate::services::model_map::ModelMap;
use crate::services::replicate::{extract_video_url, PredictionInput, ReplicateClient};
use chrono::Utc;
use secrecy::Secret;
use service_core::error::AppError;
use std::time::Instant;

pub const SERVICE_LABEL: &str = "replicate";

/// A resolved provider call plus what the result should echo back.
struct Job<'a> {
    route: &'static str,
    /// Canonical id, used for metric labels.
    model_label: &'static str,
    provider_model: &'static str,
    input: PredictionInput,
    echo_model: &'a str,
    prompt: &'a str,
    enhanced_prompt: Option<String>,
}

/// Runs one generation against the provider.
///
/// The caller has already checked the method and obtained the token; this
/// validates the prompt, resolves the model and shapes the result. Provider
/// failures become `UpstreamFailure`, a missing URL `UpstreamEmptyResult`.
pub async fn dispatch(
    provider: &ReplicateClient,
    model_map: &ModelMap,
    token: &Secret<String>,
    request: &GenerationRequest,
) -> Result<GenerationResult, AppError> {
    let prompt = request.validated_prompt()?;
    let enhanced_prompt = request.enhanced_prompt(prompt);
    let input = PredictionInput::text(enhanced_prompt.as_deref().unwrap_or(prompt));

    let job = Job {
        route: "/generate-video",
        model_label: model_map.canonical_id(&request.model),
        provider_model: model_map.resolve(&request.model),
        input,
        echo_model: &request.model,
        prompt,
        enhanced_prompt,
    };

    execute(provider, token, job).await
}

/// Animates an uploaded image.
///
/// Unlike text generation, unknown model ids are rejected: only models in
/// `model_map` accept an input image. The model is checked before the
/// image is decoded.
pub async fn dispatch_image(
    provider: &ReplicateClient,
    model_map: &ModelMap,
    token: &Secret<String>,
    request: &ImageGenerationRequest,
) -> Result<GenerationResult, AppError> {
    let (model_label, provider_model) = model_map
        .lookup(&request.model)
        .ok_or_else(|| AppError::InvalidInput(request.unsupported_model_message()))?;

    let image = ImagePayload::decode(request.image.as_deref().unwrap_or_default())?;
    tracing::debug!(mime = image.mime, bytes = image.size, "Decoded input image");

    let prompt = request.prompt();

    let job = Job {
        route: "/generate-video-from-image",
        model_label,
        provider_model,
        input: PredictionInput::image(image.to_data_url(), prompt),
        echo_model: &request.model,
        prompt,
        enhanced_prompt: None,
    };

    execute(provider, token, job).await
}

async fn execute(
    provider: &ReplicateClient,
    token: &Secret<String>,
    job: Job<'_>,
) -> Result<GenerationResult, AppError> {
    tracing::info!(
        route = job.route,
        model = %job.model_label,
        provider_model = %job.provider_model,
        prompt_len = job.input.prompt.as_deref().map_or(0, prompt_len),
        has_image = job.input.input_image.is_some(),
        "Dispatching video generation"
    );

    let start = Instant::now();
    let outcome = provider
        .run(token, job.provider_model, &job.input)
        .await
        .and_then(|output| extract_video_url(&output));
    let elapsed = start.elapsed();

    match outcome {
        Ok(Some(video_url)) => {
            record_generation(job.model_label, GenerationOutcome::Success, elapsed);
            tracing::info!(
                model = %job.model_label,
                elapsed_ms = elapsed.as_millis() as u64,
                "Video generation completed"
            );

            Ok(GenerationResult {
                video_url,
                prompt: job.prompt.to_string(),
                enhanced_prompt: job.enhanced_prompt,
                model: job.echo_model.to_string(),
                timestamp: iso_timestamp(Utc::now()),
                service: SERVICE_LABEL.to_string(),
            })
        }
        Ok(None) => {
            record_generation(job.model_label, GenerationOutcome::EmptyResult, elapsed);
            tracing::warn!(
                model = %job.model_label,
                provider_model = %job.provider_model,
                "Provider returned no video URL"
            );
            Err(AppError::UpstreamEmptyResult)
        }
        Err(e) => {
            record_generation(job.model_label, GenerationOutcome::Failure, elapsed);
            tracing::error!(
                model = %job.model_label,
                provider_model = %job.provider_model,
                error = %e,
                "{} error",
                job.route
            );
            Err(AppError::UpstreamFailure(e.to_string()))
        }
    }
}
