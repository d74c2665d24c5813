//! Application startup and lifecycle management.

use crate::config::VideogenConfig;
use crate::handlers;
use crate::models::{Catalog, CATALOG};
use crate::services::{CredentialSource, ModelMap, ReplicateClient, IMAGE_MODEL_MAP, MODEL_MAP};
use axum::{extract::DefaultBodyLimit, middleware::from_fn, routing::any, Router};
use service_core::error::AppError;
use service_core::middleware::{make_request_span, metrics_middleware, request_id_middleware};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// The model maps and catalog are injected so tests can swap in fixtures.
#[derive(Clone)]
pub struct AppState {
    pub provider: ReplicateClient,
    pub credentials: CredentialSource,
    pub model_map: &'static ModelMap,
    pub image_model_map: &'static ModelMap,
    pub catalog: &'static Catalog,
}

impl AppState {
    pub fn from_config(config: &VideogenConfig) -> Self {
        Self {
            provider: ReplicateClient::new(&config.replicate),
            credentials: CredentialSource::new(config.replicate.token_env_var.clone()),
            model_map: &MODEL_MAP,
            image_model_map: &IMAGE_MODEL_MAP,
            catalog: &CATALOG,
        }
    }
}

/// Upper bound on request bodies for image uploads, which arrive base64
/// encoded inside JSON.
pub const MAX_IMAGE_BODY_BYTES: usize = 20 * 1024 * 1024;

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", any(handlers::health_check))
        .route("/models", any(handlers::list_models))
        .route("/generate-video", any(handlers::generate_video))
        .route(
            "/generate-video-from-image",
            any(handlers::generate_video_from_image)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_BODY_BYTES)),
        )
        .route("/test-video", any(handlers::test_video))
}

/// Builds the HTTP router. Endpoints are served both at the root and under
/// `/api`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api_routes())
        .nest("/api", api_routes())
        .route("/metrics", any(handlers::metrics))
        .fallback(handlers::not_found)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Binds the listener immediately; port 0 picks a free port.
    pub async fn build(config: VideogenConfig) -> Result<Self, AppError> {
        crate::services::metrics::init_metrics();

        let state = AppState::from_config(&config);

        tracing::info!(
            api_base_url = %config.replicate.api_base_url,
            token_env_var = %config.replicate.token_env_var,
            provider_configured = state.credentials.is_configured(),
            "Initialized Replicate provider"
        );

        let addr = config.common.socket_addr();
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Videogen service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
