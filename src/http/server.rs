//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the three API handlers
//! - Wire up middleware (request gate, tracing, limits, request ID)
//! - Bind the server to a listener and run it to shutdown
//!
//! The three API routes are registered with `any()` so the request gate,
//! not the router, owns the method contract: preflights get their 204 and
//! disallowed verbs get the JSON 405 envelope instead of axum's default.

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{any, get};
use axum::{middleware, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::schema::{AccessConfig, AppConfig};
use crate::http::middleware::request_gate;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::http::{access_codes, proxy};
use crate::tmdb::TmdbClient;

/// Application state injected into handlers.
///
/// Everything here is immutable after startup; concurrent handler
/// invocations share it read-only.
#[derive(Clone)]
pub struct AppState {
    pub tmdb: Arc<TmdbClient>,
    pub access: Arc<AccessConfig>,
}

/// HTTP server for the movie-vault proxy.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server from validated configuration and a
    /// ready-built upstream client.
    pub fn new(config: AppConfig, tmdb: TmdbClient) -> Self {
        let state = AppState {
            tmdb: Arc::new(tmdb),
            access: Arc::new(config.access.clone()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/tmdb-proxy", any(proxy::tmdb_proxy))
            .route("/api/verify-guest-code", any(access_codes::verify_guest_code))
            .route("/api/verify-secret-code", any(access_codes::verify_secret_code))
            .route_layer(middleware::from_fn(request_gate))
            .route("/health", get(health))
            .with_state(state)
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_size))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[derive(Serialize)]
struct SystemStatus {
    version: &'static str,
    status: &'static str,
}

/// `GET /health`: liveness for the hosting runtime and the CLI. Not part
/// of the browser-facing API, so the request gate does not apply.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(SystemStatus {
            version: env!("CARGO_PKG_VERSION"),
            status: "operational",
        }),
    )
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
