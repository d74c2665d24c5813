//! HTTP handlers for the videogen service.
//!
//! Endpoint handlers are mounted with `any` and check the method themselves
//! so every rejected verb gets the same JSON 405 body.

pub mod catalog;
pub mod demo;
pub mod generate;
pub mod generate_image;
pub mod health;
pub mod metrics;

pub use catalog::list_models;
pub use demo::test_video;
pub use generate::generate_video;
pub use generate_image::generate_video_from_image;
pub use health::health_check;
pub use metrics::metrics;

use axum::http::Method;
use service_core::error::AppError;

pub(crate) fn ensure_method(actual: &Method, expected: Method) -> Result<(), AppError> {
    if *actual == expected {
        Ok(())
    } else {
        Err(AppError::MethodNotAllowed)
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
