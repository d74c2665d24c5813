use super::ensure_method;
use axum::http::Method;
use service_core::error::AppError;

pub async fn metrics(method: Method) -> Result<String, AppError> {
    ensure_method(&method, Method::GET)?;
    Ok(crate::services::metrics::get_metrics())
}
