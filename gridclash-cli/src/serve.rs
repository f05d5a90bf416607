//! Serve command - start the match server

use anyhow::Result;
use clap::Args;

use gridclash_server::{run_server, ServerConfig};

#[derive(Args)]
pub struct ServeArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8080")]
    pub port: u16,

    /// Browser client origin allowed through CORS
    #[arg(long, default_value = "http://localhost:5173")]
    pub allowed_origin: String,
}

/// Run serve command
pub fn run(args: ServeArgs) -> Result<()> {
    let config = configure_server(&args)?;

    tracing::info!("Starting GRIDCLASH match server on port {}", config.port);

    start_server(config)
}

/// Configure server from command arguments
fn configure_server(args: &ServeArgs) -> Result<ServerConfig> {
    validate_origin(&args.allowed_origin)?;

    Ok(ServerConfig {
        port: args.port,
        allowed_origin: args.allowed_origin.clone(),
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server(config).await })
}

/// Validate that the origin is usable as a CORS header value
fn validate_origin(origin: &str) -> Result<()> {
    if origin.is_empty() || origin.chars().any(|c| c.is_control() || c == ' ') {
        anyhow::bail!("invalid client origin: {:?}", origin);
    }
    Ok(())
}
