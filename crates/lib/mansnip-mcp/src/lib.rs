//! MCP server implementation for manpage snippet queries.
//!
//! This crate wires the snippet-engine boundary from `mansnip-core` into an
//! rmcp server handler: tool discovery answers from an immutable registry,
//! tool calls run through the validating dispatcher, and results are framed
//! as MCP content blocks.

mod dispatch;
mod registry;
pub mod server;

use std::sync::Arc;

use mansnip_core::SnippetEngine;
use rmcp::model::{
    CallToolRequestParams,
    CallToolResult,
    Content,
    ListToolsResult,
    PaginatedRequestParams,
    ServerCapabilities,
    ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData, ServerHandler};

pub use crate::dispatch::{DispatchError, Dispatcher};
pub use crate::registry::{MANPAGE_QUERY, ToolRegistry};

const SERVER_INSTRUCTIONS: &str = r"mansnip-mcp answers manual-page questions with short contextual snippets.

Workflow:
1. Call `manpage_query` with `manpage` (the page name, e.g. `ls`) and `query`
   (the term to look up, e.g. `sort`).
2. Pass `section` only when the page name is ambiguous across manual
   sections (e.g. `printf` in section 1 vs 3).

Notes:
- The snippet is plain text, already trimmed for agent consumption.
- Failures carry the extractor's own message (page not found, term not
  found, ambiguous section); retry with different arguments if needed.";

/// MCP server wrapper around the tool registry and dispatcher.
///
/// Stateless between calls; cloning shares the registry and engine handle.
#[derive(Clone)]
pub struct MansnipMcp {
    registry: ToolRegistry,
    dispatcher: Dispatcher,
}

impl MansnipMcp {
    /// Creates a new server backed by the given snippet engine.
    #[must_use]
    pub fn new(engine: Arc<dyn SnippetEngine>) -> Self {
        let registry = ToolRegistry::new();
        let dispatcher = Dispatcher::new(registry.clone(), engine);
        Self {
            registry,
            dispatcher,
        }
    }
}

impl ServerHandler for MansnipMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.registry.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = request.arguments.unwrap_or_default();
        let outcome = self.dispatcher.dispatch(&request.name, &arguments).await;
        Ok(frame_outcome(outcome))
    }
}

/// Frames a dispatch outcome as an MCP content envelope.
///
/// Business failures become an error-flagged result on the same channel a
/// success would use; they are never promoted to protocol errors.
fn frame_outcome(outcome: Result<String, DispatchError>) -> CallToolResult {
    match outcome {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => CallToolResult::error(vec![Content::text(err.to_string())]),
    }
}
