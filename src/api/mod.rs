//! HTTP API server for the credbot gateway

pub mod chat;
pub mod health;
pub mod talk;
pub mod upload;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::Result;
use crate::llm::CompletionProvider;
use crate::stt::Transcriber;

/// Shared state for API handlers
///
/// Provider handles are constructed once at startup and reused across
/// requests; handlers hold no other state.
#[derive(Clone)]
pub struct ApiState {
    pub stt: Arc<dyn Transcriber>,
    pub llm: Arc<dyn CompletionProvider>,
}

/// Build the router with all routes
#[must_use]
pub fn router(state: Arc<ApiState>) -> Router {
    let router = Router::new()
        .route("/", get(health::health))
        .route("/chat", post(chat::handle_text_chat))
        .route("/talk", post(talk::handle_voice_chat))
        .with_state(state);

    // CORS layer for cross-origin requests from frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(cors).layer(TraceLayer::new_for_http())
}

/// API server
pub struct ApiServer {
    state: Arc<ApiState>,
    port: u16,
}

impl ApiServer {
    /// Create a new API server
    #[must_use]
    pub fn new(stt: Arc<dyn Transcriber>, llm: Arc<dyn CompletionProvider>, port: u16) -> Self {
        Self {
            state: Arc::new(ApiState { stt, llm }),
            port,
        }
    }

    /// Run the API server
    ///
    /// # Errors
    ///
    /// Returns error if server fails to bind or run
    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| crate::Error::Config(format!("failed to bind API server: {e}")))?;

        tracing::info!(port = self.port, "API server listening");

        axum::serve(listener, router(self.state))
            .await
            .map_err(|e| crate::Error::Config(format!("API server error: {e}")))?;

        Ok(())
    }

    /// Run the API server in a background task
    #[must_use]
    pub fn spawn(self) -> tokio::task::JoinHandle<Result<()>> {
        tokio::spawn(async move { self.run().await })
    }
}
