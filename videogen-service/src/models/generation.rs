use serde::{Deserialize, Serialize};
use serde_json::Value;
use service_core::error::AppError;

pub const DEFAULT_MODEL_ID: &str = "hailuo";
pub const DEFAULT_IMAGE_MODEL_ID: &str = "runway";
pub const MIN_PROMPT_CHARS: usize = 3;
pub const INVALID_PROMPT_MESSAGE: &str = "Prompt must be a non-empty string (min 3 chars)";

/// Prompt length as the validation rule counts it: Unicode scalar values.
pub fn prompt_len(prompt: &str) -> usize {
    prompt.chars().count()
}

/// Body of a generation request.
///
/// Parsed leniently: a missing or malformed body behaves like `{}`, and
/// fields of the wrong JSON type are treated as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: Option<String>,
    /// Client-facing model id, echoed back verbatim in the result.
    pub model: String,
    pub style: Option<String>,
    pub camera_movement: Option<String>,
    pub visual_effect: Option<String>,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            prompt: None,
            model: DEFAULT_MODEL_ID.to_string(),
            style: None,
            camera_movement: None,
            visual_effect: None,
        }
    }
}

impl GenerationRequest {
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);

        Self {
            prompt: field("prompt"),
            model: field("model").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            style: field("style"),
            camera_movement: field("camera_movement"),
            visual_effect: field("visual_effect"),
        }
    }

    /// Returns the trimmed prompt, or `InvalidInput` when it is missing or
    /// shorter than three characters after trimming.
    pub fn validated_prompt(&self) -> Result<&str, AppError> {
        self.prompt
            .as_deref()
            .map(str::trim)
            .filter(|p| prompt_len(p) >= MIN_PROMPT_CHARS)
            .ok_or_else(|| AppError::InvalidInput(INVALID_PROMPT_MESSAGE.to_string()))
    }

    /// Splices the optional style, camera and effect tags around `base`.
    ///
    /// Returns `None` when no modifier is set, so the provider receives the
    /// prompt untouched.
    pub fn enhanced_prompt(&self, base: &str) -> Option<String> {
        fn modifier(tag: &Option<String>) -> Option<&str> {
            tag.as_deref().map(str::trim).filter(|t| !t.is_empty())
        }

        let style = modifier(&self.style);
        let camera = modifier(&self.camera_movement);
        let effect = modifier(&self.visual_effect);

        if style.is_none() && camera.is_none() && effect.is_none() {
            return None;
        }

        let parts: Vec<&str> = [style, Some(base), camera, effect]
            .into_iter()
            .flatten()
            .collect();

        Some(parts.join(", "))
    }
}

/// Body of an image-to-video request: `{image, prompt?, model?}`.
///
/// Parsed with the same leniency as [`GenerationRequest`]. The prompt is
/// optional here since the image carries the content.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageGenerationRequest {
    pub prompt: Option<String>,
    pub image: Option<String>,
    pub model: String,
}

impl ImageGenerationRequest {
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);

        Self {
            prompt: field("prompt"),
            image: field("image"),
            model: field("model").unwrap_or_else(|| DEFAULT_IMAGE_MODEL_ID.to_string()),
        }
    }

    /// Trimmed prompt, empty when absent.
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().map(str::trim).unwrap_or_default()
    }

    pub fn unsupported_model_message(&self) -> String {
        format!(
            "Model {} does not support image-to-video generation",
            self.model
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub video_url: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_prompt: Option<String>,
    pub model: String,
    pub timestamp: String,
    pub service: String,
}
