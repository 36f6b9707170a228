//! The snippet-engine boundary.
//!
//! The engine locates a manual page, parses it, and computes the excerpt
//! relevant to a query term. None of that logic lives in this workspace; the
//! server only depends on the synchronous contract defined here.

use std::error::Error;
use std::fmt;

use crate::request::SnippetQuery;

/// Per-call engine configuration.
///
/// Constructed fresh for every call and owned by it; there is no per-request
/// override surface in the current contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Emit contextual, LLM-oriented snippet formatting.
    pub llm_context: bool,
}

impl EngineConfig {
    /// The fixed configuration used for tool calls: contextual formatting on.
    #[must_use]
    pub const fn contextual() -> Self {
        Self { llm_context: true }
    }

    /// Environment variables the extractor process understands.
    #[must_use]
    pub fn env(&self) -> Vec<(&'static str, &'static str)> {
        if self.llm_context {
            vec![("MANSNIP_LLM", "1")]
        } else {
            Vec::new()
        }
    }
}

/// Failure raised by a snippet engine.
///
/// `Extraction` messages come from the engine itself (page not found, query
/// not found, ambiguous section, parse error) and must reach the client
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The extractor process could not be started.
    Spawn { program: String, message: String },
    /// The engine ran and rejected the request.
    Extraction(String),
    /// The engine produced output this process could not decode.
    InvalidOutput(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { program, message } => {
                write!(f, "failed to start snippet engine {program}: {message}")
            }
            Self::Extraction(message) => write!(f, "{message}"),
            Self::InvalidOutput(message) => {
                write!(f, "invalid snippet engine output: {message}")
            }
        }
    }
}

impl Error for EngineError {}

/// Synchronous snippet extraction contract.
///
/// Implementations may block on file I/O; callers on an async runtime are
/// expected to run the call on a blocking pool. Implementations hold no
/// per-call state and must be safe to invoke reentrantly.
pub trait SnippetEngine: Send + Sync {
    /// Returns the excerpt of `query.manpage` relevant to `query.query`.
    ///
    /// # Errors
    /// Returns [`EngineError`] when the page or query cannot be resolved or
    /// the engine itself fails.
    fn snippet(&self, query: &SnippetQuery, config: &EngineConfig) -> Result<String, EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contextual_config_enables_llm_formatting() {
        let config = EngineConfig::contextual();
        assert!(config.llm_context);
        assert_eq!(config.env(), vec![("MANSNIP_LLM", "1")]);
    }

    #[test]
    fn plain_config_exports_no_env() {
        let config = EngineConfig { llm_context: false };
        assert!(config.env().is_empty());
    }

    #[test]
    fn extraction_error_displays_verbatim() {
        let err = EngineError::Extraction("ambiguous page".to_string());
        assert_eq!(err.to_string(), "ambiguous page");
    }
}
