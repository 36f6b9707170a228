//! Static description of the tools this server exposes.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};

/// Name of the single operation this server registers.
pub const MANPAGE_QUERY: &str = "manpage_query";

const MANPAGE_QUERY_DESCRIPTION: &str = "return a contextual snippet from a manpage";

/// Immutable tool descriptor list, built once at server construction and
/// passed into the dispatcher explicitly. Repeated discovery calls observe
/// the same value for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
}

impl ToolRegistry {
    #[must_use]
    pub fn new() -> Self {
        let tool = Tool::new(MANPAGE_QUERY, MANPAGE_QUERY_DESCRIPTION, manpage_query_schema());
        Self { tools: vec![tool] }
    }

    /// Descriptors for every registered tool.
    #[must_use]
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.clone()
    }

    /// Whether `name` refers to a registered tool.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|tool| tool.name == name)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn manpage_query_schema() -> Arc<JsonObject> {
    let mut properties = JsonObject::new();
    properties.insert(
        "section".to_string(),
        json!({
            "type": "string",
            "description": "man page section if needed for disambiguation",
        }),
    );
    properties.insert(
        "manpage".to_string(),
        json!({
            "type": "string",
            "description": "man page to retrieve",
        }),
    );
    properties.insert(
        "query".to_string(),
        json!({
            "type": "string",
            "description": "term to look up",
        }),
    );

    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    schema.insert("required".to_string(), json!(["manpage", "query"]));
    Arc::new(schema)
}
