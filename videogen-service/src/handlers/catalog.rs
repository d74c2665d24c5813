use super::ensure_method;
use crate::models::Catalog;
use crate::startup::AppState;
use axum::{extract::State, http::Method, Json};
use service_core::error::AppError;

/// Serves the model and prompt catalog.
pub async fn list_models(
    State(state): State<AppState>,
    method: Method,
) -> Result<Json<&'static Catalog>, AppError> {
    ensure_method(&method, Method::GET)?;
    Ok(Json(state.catalog))
}
