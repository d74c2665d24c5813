//! Replicate prediction client.
//!
//! Runs a named model with a prompt and waits for the prediction to reach a
//! terminal state, returning the raw `output` value.

use crate::config::ReplicateConfig;
use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Request to {url} failed with status {status}: {detail}")]
    Api {
        url: String,
        status: u16,
        detail: String,
    },

    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Prediction failed: {0}")]
    PredictionFailed(String),

    #[error("Prediction canceled")]
    PredictionCanceled,

    #[error("Unexpected provider output: {0}")]
    UnexpectedOutput(String),
}

/// Model input. Unset fields are left out of the request body.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PredictionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Still image for image-to-video models, as a data URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_image: Option<String>,
}

impl PredictionInput {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            input_image: None,
        }
    }

    /// An empty `prompt` is omitted rather than sent blank.
    pub fn image(input_image: String, prompt: &str) -> Self {
        Self {
            prompt: Some(prompt.to_string()).filter(|p| !p.is_empty()),
            input_image: Some(input_image),
        }
    }
}

#[derive(Debug, Serialize)]
struct CreatePredictionRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    input: &'a PredictionInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(default)]
    id: String,
    status: PredictionStatus,
    #[serde(default)]
    output: Value,
    #[serde(default)]
    error: Value,
    #[serde(default)]
    urls: Option<PredictionUrls>,
}

#[derive(Debug, Deserialize)]
struct PredictionUrls {
    get: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReplicateClient {
    client: Client,
    api_base_url: String,
    poll_interval: Duration,
}

impl ReplicateClient {
    pub fn new(config: &ReplicateConfig) -> Self {
        Self {
            client: Client::new(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            poll_interval: config.poll_interval(),
        }
    }

    /// Runs `model` to completion and returns its output.
    ///
    /// `model` is either `owner/name` (latest version) or
    /// `owner/name:version`.
    pub async fn run(
        &self,
        token: &Secret<String>,
        model: &str,
        input: &PredictionInput,
    ) -> Result<Value, ProviderError> {
        let mut prediction = self.create_prediction(token, model, input).await?;

        loop {
            match prediction.status {
                PredictionStatus::Succeeded => return Ok(prediction.output),
                PredictionStatus::Failed => {
                    return Err(ProviderError::PredictionFailed(describe_error(
                        &prediction.error,
                    )))
                }
                PredictionStatus::Canceled => return Err(ProviderError::PredictionCanceled),
                PredictionStatus::Starting
                | PredictionStatus::Processing
                | PredictionStatus::Unknown => {
                    tracing::debug!(
                        prediction_id = %prediction.id,
                        status = ?prediction.status,
                        "Waiting for Replicate prediction"
                    );
                    tokio::time::sleep(self.poll_interval).await;

                    let url = prediction
                        .urls
                        .as_ref()
                        .and_then(|u| u.get.clone())
                        .unwrap_or_else(|| {
                            format!("{}/predictions/{}", self.api_base_url, prediction.id)
                        });
                    prediction = self.send(self.client.get(&url), &url, token).await?;
                }
            }
        }
    }

    async fn create_prediction(
        &self,
        token: &Secret<String>,
        model: &str,
        input: &PredictionInput,
    ) -> Result<Prediction, ProviderError> {
        let (url, version) = match model.split_once(':') {
            Some((_, version)) => (format!("{}/predictions", self.api_base_url), Some(version)),
            None => (
                format!("{}/models/{}/predictions", self.api_base_url, model),
                None,
            ),
        };

        tracing::debug!(model = %model, url = %url, "Creating Replicate prediction");

        let body = CreatePredictionRequest { version, input };
        let request = self
            .client
            .post(&url)
            .header("Prefer", "wait")
            .json(&body);

        self.send(request, &url, token).await
    }

    async fn send(
        &self,
        request: RequestBuilder,
        url: &str,
        token: &Secret<String>,
    ) -> Result<Prediction, ProviderError> {
        let response = request
            .bearer_auth(token.expose_secret())
            .send()
            .await
            .map_err(|source| ProviderError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or(text);

            return Err(ProviderError::Api {
                url: url.to_string(),
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<Prediction>()
            .await
            .map_err(|source| ProviderError::Decode {
                url: url.to_string(),
                source,
            })
    }
}

fn describe_error(error: &Value) -> String {
    match error {
        Value::Null => "unknown error".to_string(),
        Value::String(message) => message.clone(),
        other => other.to_string(),
    }
}

/// Normalizes a prediction output into a single video URL.
///
/// Sequences yield their first element. `Ok(None)` means the provider
/// produced nothing usable (null, empty string, empty array); any other
/// JSON type is malformed.
pub fn extract_video_url(output: &Value) -> Result<Option<String>, ProviderError> {
    let candidate = match output {
        Value::Array(items) => items.first(),
        other => Some(other),
    };

    match candidate {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(url)) if url.is_empty() => Ok(None),
        Some(Value::String(url)) => Ok(Some(url.clone())),
        Some(other) => Err(ProviderError::UnexpectedOutput(other.to_string())),
    }
}
