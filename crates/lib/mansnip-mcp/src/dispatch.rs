//! Validation boundary between the wire protocol and the snippet engine.
//!
//! The dispatcher receives the raw tool-call mapping, checks the operation
//! name against the registry, converts the arguments into a typed
//! [`SnippetQuery`], and runs the engine on the blocking pool. It holds no
//! mutable state and is safe to invoke reentrantly.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use mansnip_core::{EngineConfig, EngineError, SnippetEngine, SnippetQuery};
use rmcp::model::JsonObject;
use serde_json::Value;

use crate::registry::ToolRegistry;

/// Failure taxonomy for a single tool call.
///
/// Every variant is terminal for the call that produced it and is reported
/// back on the same channel as a success would be; none is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The client asked for an operation the registry does not expose.
    UnknownOperation(String),
    /// A required argument is missing or an argument is not a string.
    InvalidArgument(String),
    /// The snippet engine rejected the request; message carried verbatim.
    Engine(EngineError),
    /// This server failed to run the engine at all (e.g. the blocking task
    /// panicked). Never carries an engine-authored message.
    Internal(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOperation(name) => write!(f, "unknown tool: {name}"),
            Self::InvalidArgument(message) => write!(f, "{message}"),
            Self::Engine(err) => write!(f, "{err}"),
            Self::Internal(message) => write!(f, "internal error: {message}"),
        }
    }
}

impl Error for DispatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(err) => Some(err),
            Self::UnknownOperation(_) | Self::InvalidArgument(_) | Self::Internal(_) => None,
        }
    }
}

/// Routes validated tool calls to the snippet engine.
#[derive(Clone)]
pub struct Dispatcher {
    registry: ToolRegistry,
    engine: Arc<dyn SnippetEngine>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(registry: ToolRegistry, engine: Arc<dyn SnippetEngine>) -> Self {
        Self { registry, engine }
    }

    /// Validates and executes one tool call, returning the snippet text.
    ///
    /// Invalid input never reaches the engine.
    ///
    /// # Errors
    /// Returns [`DispatchError`] when the operation name is unknown, the
    /// arguments fail validation, or the engine fails.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: &JsonObject,
    ) -> Result<String, DispatchError> {
        if !self.registry.contains(name) {
            return Err(DispatchError::UnknownOperation(name.to_string()));
        }

        let query = parse_query(arguments)?;
        let config = EngineConfig::contextual();
        let engine = Arc::clone(&self.engine);

        // The engine may read manual pages from disk; keep that off the
        // protocol loop.
        tokio::task::spawn_blocking(move || engine.snippet(&query, &config))
            .await
            .map_err(|err| DispatchError::Internal(format!("snippet engine task failed: {err}")))?
            .map_err(DispatchError::Engine)
    }
}

/// The single loosely-typed boundary: everything past this function operates
/// on [`SnippetQuery`], never on the raw mapping.
fn parse_query(arguments: &JsonObject) -> Result<SnippetQuery, DispatchError> {
    let manpage = required_string(arguments, "manpage")?;
    let query = required_string(arguments, "query")?;
    let section = optional_string(arguments, "section")?;
    Ok(SnippetQuery::new(section, manpage, query))
}

fn required_string(arguments: &JsonObject, field: &'static str) -> Result<String, DispatchError> {
    match arguments.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(DispatchError::InvalidArgument(format!(
            "argument `{field}` must be a string"
        ))),
        None => Err(DispatchError::InvalidArgument(format!(
            "missing required argument: {field}"
        ))),
    }
}

fn optional_string(arguments: &JsonObject, field: &'static str) -> Result<String, DispatchError> {
    match arguments.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(DispatchError::InvalidArgument(format!(
            "argument `{field}` must be a string"
        ))),
    }
}
