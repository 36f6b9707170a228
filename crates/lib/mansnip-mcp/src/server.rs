//! MCP server runner for mansnip-mcp.

use std::sync::Arc;

use mansnip_core::SnippetEngine;
use rmcp::serve_server;
use rmcp::transport::io::stdio;

use crate::MansnipMcp;

/// Serves the MCP server over stdio until the client closes the channel.
///
/// The rmcp transport owns the initialization handshake and message framing;
/// malformed frames are rejected there and never reach the dispatcher.
///
/// # Errors
/// Returns any transport or server error.
pub async fn serve_stdio(
    engine: Arc<dyn SnippetEngine>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let service = MansnipMcp::new(engine);
    let (stdin, stdout) = stdio();
    let running = serve_server(service, (stdin, stdout)).await?;
    let _ = running.waiting().await?;
    Ok(())
}
