//! Process-backed snippet engine.
//!
//! Spawns the `mansnip` extractor with the section (when given), page name,
//! and query term as arguments, exports the configuration as environment
//! variables, and maps spawn/exit/decoding failures to [`EngineError`].

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, warn};

use crate::extract::{EngineConfig, EngineError, SnippetEngine};
use crate::request::SnippetQuery;

/// Snippet engine that shells out to an extractor executable.
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    program: PathBuf,
}

impl ProcessEngine {
    #[must_use]
    pub const fn new(program: PathBuf) -> Self {
        Self { program }
    }

    fn command(&self, query: &SnippetQuery, config: &EngineConfig) -> Command {
        let mut command = Command::new(&self.program);
        if !query.section.is_empty() {
            command.arg(&query.section);
        }
        command.arg(&query.manpage);
        command.arg(&query.query);
        command.envs(config.env());
        command
    }
}

impl SnippetEngine for ProcessEngine {
    fn snippet(&self, query: &SnippetQuery, config: &EngineConfig) -> Result<String, EngineError> {
        debug!(
            program = %self.program.display(),
            manpage = %query.manpage,
            "invoking snippet engine"
        );

        let output = self
            .command(query, config)
            .output()
            .map_err(|err| EngineError::Spawn {
                program: self.program.display().to_string(),
                message: err.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            warn!(
                program = %self.program.display(),
                status = %output.status,
                "snippet engine failed"
            );
            let message = if stderr.is_empty() {
                format!("snippet engine exited with {}", output.status)
            } else {
                stderr.to_string()
            };
            return Err(EngineError::Extraction(message));
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|err| EngineError::InvalidOutput(err.to_string()))?;
        Ok(text.trim_end_matches('\n').to_string())
    }
}
