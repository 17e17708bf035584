// Tool trait, registry and JSON schema helpers

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::args::ValidationErrors;
use std::collections::HashMap;
use std::sync::Arc;

/// Failure that stops a tool call before its handler runs.
///
/// Everything that happens inside the handler ends up in the
/// [`CallToolResult`] instead.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Invalid arguments for {tool}: {errors}")]
    InvalidArguments {
        tool: String,
        errors: ValidationErrors,
    },
}

impl ToolError {
    pub fn invalid(tool: &str, errors: ValidationErrors) -> Self {
        Self::InvalidArguments {
            tool: tool.to_string(),
            errors,
        }
    }
}

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Validate the arguments and run the tool.
    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError>;
}

/// Tool registry for managing available tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool, replacing any previous tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let schema = tool.schema();
        if self.tools.insert(schema.name.clone(), tool).is_some() {
            tracing::warn!(tool = %schema.name, "Tool registered twice, keeping the latest");
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all tool schemas, sorted by name
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self.tools.values().map(|t| t.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: serde_json::Value, required: Vec<&str>) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_string_min(min_length: usize, description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "minLength": min_length,
        "description": description
    })
}

pub fn json_schema_integer(minimum: u32, maximum: u32, description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "integer",
        "minimum": minimum,
        "maximum": maximum,
        "description": description
    })
}

pub fn json_schema_enum(values: Vec<&str>, description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "enum": values,
        "description": description
    })
}

pub fn json_schema_array(
    items: serde_json::Value,
    min_items: usize,
    description: &str,
) -> serde_json::Value {
    serde_json::json!({
        "type": "array",
        "items": items,
        "minItems": min_items,
        "description": description
    })
}
