//! Daemon entry point for the manpage snippet MCP server.
//!
//! Loads configuration from CLI arguments and the environment, builds the
//! process-backed snippet engine, and serves the MCP protocol over stdio.

mod config;

use std::sync::Arc;

use mansnip_core::ProcessEngine;
use mansnip_mcp::server::serve_stdio;
use tracing_subscriber::EnvFilter;

use crate::config::MansnipConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = MansnipConfig::from_args()?;
    init_tracing(&config.log_filter);

    tracing::info!(
        engine = %config.engine_bin.display(),
        "starting manpage snippet MCP server"
    );

    let engine = Arc::new(ProcessEngine::new(config.engine_bin));
    serve_stdio(engine).await?;
    Ok(())
}

/// Logs go to stderr; stdout carries the MCP protocol.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
