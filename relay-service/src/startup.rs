//! Application startup and lifecycle management.

use crate::config::RelayConfig;
use crate::handlers;
use crate::models::PersonaContext;
use crate::services::providers::gemini::{GeminiConfig, GeminiProvider};
use crate::services::providers::GenerativeProvider;
use crate::services::RelayService;
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{make_request_span, permissive_cors, request_id_middleware};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub relay: RelayService,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(config: &RelayConfig, provider: Arc<dyn GenerativeProvider>) -> Self {
        let persona = PersonaContext::new(config.persona.context.as_str());
        Self {
            relay: RelayService::new(provider, persona),
            max_upload_bytes: config.upload.max_bytes,
        }
    }
}

/// Build the HTTP router with every relay route and the shared layers.
pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::health_check))
        .route("/health", get(handlers::health_check))
        .route("/chat", post(handlers::text_chat))
        .route("/audio-chat", post(handlers::audio_chat))
        .route("/analyze", post(handlers::analyze_video))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>))
        .layer(from_fn(request_id_middleware))
        .layer(permissive_cors())
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application against the real Gemini backend.
    pub async fn build(config: RelayConfig) -> Result<Self, AppError> {
        let provider = GeminiProvider::new(GeminiConfig::from(&config.gemini)).map_err(|e| {
            tracing::error!("Failed to create HTTP client: {}", e);
            AppError::InternalError(anyhow::Error::new(e))
        })?;

        tracing::info!(
            model = %provider.model(),
            timeout_secs = ?config.gemini.timeout.map(|t| t.as_secs()),
            "Initialized Gemini provider"
        );

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application with an explicit provider.
    pub async fn build_with_provider(
        config: RelayConfig,
        provider: Arc<dyn GenerativeProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState::new(&config, provider);
        let router = build_router(state);

        // Port 0 binds a random port, used by the tests
        let addr = config.common.socket_addr();
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Relay service listening on {}:{}", addr.ip(), port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until the process is stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }

    /// Serve until `signal` resolves, then drain in-flight requests.
    pub async fn run_with_graceful_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
    }
}
