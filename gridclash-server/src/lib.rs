//! GRIDCLASH Server - HTTP transport for the match engine
//!
//! This crate provides the web backend:
//! - Snapshot fetch for the connection handshake
//! - Long-poll push of snapshots after every accepted mutation
//! - Deploy and move endpoints
//! - Character catalog for the client's deployment picker

mod routes;
mod state;

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use axum::{routing::get, routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use state::{PublishedMatch, ServerState};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    /// Browser client origin allowed through CORS
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> anyhow::Result<Router> {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .map_err(|_| anyhow::anyhow!("invalid allowed origin: {}", config.allowed_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Ok(Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Character catalog
        .route("/api/characters", get(routes::characters::get_characters))
        // Match state: handshake fetch + long-poll push
        .route("/api/state", get(routes::snapshot::get_state))
        .route("/api/state/poll", get(routes::snapshot::poll_state))
        // Match requests
        .route("/api/deploy", post(routes::game::deploy))
        .route("/api/move", post(routes::game::move_character))
        // Shared state
        .with_state(state)
        .layer(cors))
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new());
    let router = create_router(&config, state)?;

    tracing::info!("GRIDCLASH server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Allowed client origin: {}", config.allowed_origin);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
