#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use videogen_service::config::{ReplicateConfig, VideogenConfig};
use videogen_service::{build_router, AppState};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "r8_test_token";

/// Router wired to a fake Replicate API.
///
/// Each context reads its credential from a uniquely named environment
/// variable so tests can toggle it without racing each other.
pub struct TestContext {
    pub provider: MockServer,
    pub token_env_var: String,
    pub router: Router,
}

impl TestContext {
    pub async fn new() -> Self {
        let provider = MockServer::start().await;
        let state = AppState::from_config(&test_config(&provider));
        Self::with_state(provider, state)
    }

    pub fn with_state(provider: MockServer, state: AppState) -> Self {
        Self {
            token_env_var: state.credentials.env_var().to_string(),
            router: build_router(state),
            provider,
        }
    }

    pub async fn with_token() -> Self {
        let ctx = Self::new().await;
        ctx.set_token(TEST_TOKEN);
        ctx
    }

    pub fn set_token(&self, value: &str) {
        std::env::set_var(&self.token_env_var, value);
    }

    pub fn clear_token(&self) {
        std::env::remove_var(&self.token_env_var);
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("content-type", "application/json");
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body should be JSON")
        };

        (status, json)
    }

    pub async fn raw_body(&self, method: Method, uri: &str) -> Vec<u8> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = self.router.clone().oneshot(request).await.unwrap();
        response.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    pub async fn generate(&self, body: &str) -> (StatusCode, Value) {
        self.request(Method::POST, "/generate-video", Some(body)).await
    }

    /// Full URL of a model's create-prediction endpoint on the fake API.
    pub fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}/predictions", self.provider.uri(), model)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        std::env::remove_var(&self.token_env_var);
    }
}

pub fn test_config(provider: &MockServer) -> VideogenConfig {
    VideogenConfig {
        common: service_core::config::Config::default(),
        replicate: ReplicateConfig {
            api_base_url: provider.uri(),
            token_env_var: unique_token_var(),
            poll_interval_ms: 10,
        },
    }
}

pub fn unique_token_var() -> String {
    format!("VIDEOGEN_TEST_TOKEN_{}", uuid::Uuid::new_v4().simple())
}

pub fn assert_iso_timestamp(value: &Value) {
    let text = value.as_str().expect("timestamp should be a string");
    assert!(
        chrono::DateTime::parse_from_rfc3339(text).is_ok(),
        "not ISO-8601: {}",
        text
    );
    assert!(text.ends_with('Z'), "not UTC: {}", text);
}
