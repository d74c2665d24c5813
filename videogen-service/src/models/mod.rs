pub mod catalog;
pub mod generation;
pub mod image;

pub use catalog::{Catalog, ModelInfo, OrderedMap, PromptTag, CATALOG};
pub use generation::{
    prompt_len, GenerationRequest, GenerationResult, ImageGenerationRequest,
    DEFAULT_IMAGE_MODEL_ID, DEFAULT_MODEL_ID,
};
pub use image::ImagePayload;

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a timestamp as ISO-8601 UTC with millisecond precision,
/// e.g. `2024-05-01T12:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
