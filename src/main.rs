//! Movie-vault credential-shielding proxy.
//!
//! A stateless HTTP service for a personal movie-collection web app,
//! built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │              MOVIEVAULT PROXY                 │
//!                       │                                               │
//!    Browser client     │  ┌──────────────┐     ┌───────────────────┐  │
//!    ───────────────────┼─▶│ request gate │────▶│ tmdb-proxy        │──┼──▶ TMDB API
//!    (JSON over HTTP)   │  │ CORS/method  │     │ verify-guest-code │  │   (api_key held
//!                       │  └──────────────┘     │ verify-secret-code│  │    server-side)
//!                       │                       └───────────────────┘  │
//!                       │                                               │
//!                       │  ┌─────────────────────────────────────────┐ │
//!                       │  │          Cross-Cutting Concerns          │ │
//!                       │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐ │ │
//!                       │  │  │ config │ │observability│ │ request │ │ │
//!                       │  │  │        │ │log + metrics│ │   IDs   │ │ │
//!                       │  │  └────────┘ └─────────────┘ └─────────┘ │ │
//!                       │  └─────────────────────────────────────────┘ │
//!                       └──────────────────────────────────────────────┘
//! ```
//!
//! The secrets (API key, access codes) are immutable configuration loaded
//! once at startup; no handler can mutate them and no response ever
//! carries them.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movievault_proxy::config::loader::load_config;
use movievault_proxy::http::HttpServer;
use movievault_proxy::tmdb::TmdbClient;

#[derive(Parser)]
#[command(name = "movievault-proxy")]
#[command(about = "Credential-shielding API proxy for the movie vault", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply without one.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration before tracing so the configured level can seed
    // the filter; RUST_LOG still wins when set.
    let config = load_config(cli.config.as_deref())?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "movievault_proxy={},tower_http=info",
                    config.observability.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("movievault-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            movievault_proxy::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Upstream client is built once and shared by every handler invocation.
    let tmdb = TmdbClient::new(&config.upstream)?;

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config, tmdb);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
