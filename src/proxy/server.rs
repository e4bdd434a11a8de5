//! HTTP server setup and configuration.

use axum::{
    routing::{get, post},
    Router,
};
use reqwest::Client;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::types::{CHAT_COMPLETIONS_PATH, MODELS_PATH};
use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub http_client: Client,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build state with a default HTTP client.
    ///
    /// No request timeout is set; reqwest's defaults apply.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http_client = Client::builder().build()?;
        Ok(Self {
            http_client,
            config: Arc::new(config),
        })
    }
}

/// Create the axum router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        // OpenAI-compatible endpoints, forwarded to Shimmy
        .route(CHAT_COMPLETIONS_PATH, post(handlers::chat_completions))
        .route(MODELS_PATH, get(handlers::list_models))
        // State and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until a shutdown signal arrives.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let listen_addr = config.listen_addr();
    let port = config.listen_port;
    let upstream = config.upstream_base_url.clone();

    let state = AppState::new(config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!(
        address = %listen_addr,
        upstream = %upstream,
        "Shimmy relay listening at http://localhost:{}",
        port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shimmy relay stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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
