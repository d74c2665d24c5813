//! Still images uploaded for image-to-video generation.

use base64::{engine::general_purpose, Engine as _};
use service_core::error::AppError;

pub const MISSING_IMAGE_MESSAGE: &str = "Image is required";
pub const INVALID_IMAGE_MESSAGE: &str = "Invalid image data";

const SIGNATURES: [(&[u8], &str); 4] = [
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xFF\xD8\xFF", "image/jpeg"),
    (b"GIF8", "image/gif"),
    (b"RIFF", "image/webp"),
];

/// A decoded, recognised image ready to forward as a data URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    pub mime: &'static str,
    pub size: usize,
    encoded: String,
}

impl ImagePayload {
    /// Accepts either bare base64 or a `data:...;base64,` URL.
    ///
    /// The declared media type of a data URL is ignored; the type is taken
    /// from the decoded bytes, and anything unrecognised is rejected.
    pub fn decode(raw: &str) -> Result<Self, AppError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::InvalidInput(MISSING_IMAGE_MESSAGE.to_string()));
        }

        let encoded = match raw.split_once(',') {
            Some((_, data)) => data.trim(),
            None => raw,
        };

        let bytes = general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| invalid_image(&e.to_string()))?;

        let mime = sniff_mime(&bytes).ok_or_else(|| invalid_image("unrecognised format"))?;

        Ok(Self {
            mime,
            size: bytes.len(),
            encoded: encoded.to_string(),
        })
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.encoded)
    }
}

fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    SIGNATURES
        .iter()
        .find(|(magic, mime)| {
            bytes.starts_with(magic)
                && (*mime != "image/webp" || bytes.get(8..12) == Some(&b"WEBP"[..]))
        })
        .map(|(_, mime)| *mime)
}

fn invalid_image(reason: &str) -> AppError {
    tracing::warn!(reason = %reason, "Rejected uploaded image");
    AppError::InvalidInput(INVALID_IMAGE_MESSAGE.to_string())
}
