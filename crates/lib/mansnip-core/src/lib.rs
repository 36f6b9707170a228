//! Core types for the mansnip MCP server.
//!
//! This crate owns the snippet-engine boundary: the typed query value built
//! at the server's validation edge, the per-call engine configuration, and
//! the process-backed engine that shells out to the `mansnip` extractor.

mod extract;
mod process;
mod request;

pub use extract::{EngineConfig, EngineError, SnippetEngine};
pub use process::ProcessEngine;
pub use request::SnippetQuery;
