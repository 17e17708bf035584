// Search tools for discovering exercise and muscle IDs

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::args::{parse_arguments, Checks, ValidationErrors};
use crate::tools::response::into_tool_result;
use crate::tools::{json_schema_object, json_schema_string_min, Tool, ToolError};
use musclesworked_sdk::MusclesWorkedClient;
use serde::Deserialize;

const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, PartialEq, Deserialize)]
pub struct SearchArgs {
    pub query: String,
}

impl SearchArgs {
    pub fn validate(arguments: serde_json::Value) -> Result<Self, ValidationErrors> {
        let args: Self = parse_arguments(arguments)?;

        let mut checks = Checks::new();
        checks.min_chars("query", &args.query, MIN_QUERY_CHARS);
        checks.finish()?;

        Ok(args)
    }
}

/// Tool to search exercises by name
pub struct SearchExercisesTool {
    client: MusclesWorkedClient,
}

impl SearchExercisesTool {
    pub const NAME: &'static str = "search_exercises";

    pub fn new(client: MusclesWorkedClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for SearchExercisesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.to_string(),
            description: "Search for exercises by name. Returns matching exercise IDs and names. \
                Use this to discover exercise IDs before calling get_muscles_worked or get_alternatives."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "query": json_schema_string_min(MIN_QUERY_CHARS, "Search query (e.g. 'bench press', 'squat')")
                }),
                vec!["query"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args = SearchArgs::validate(arguments)
            .map_err(|errors| ToolError::invalid(Self::NAME, errors))?;

        let result = self.client.search().exercises(&args.query).await;
        Ok(into_tool_result(Self::NAME, result))
    }
}

/// Tool to search muscles by name
pub struct SearchMusclesTool {
    client: MusclesWorkedClient,
}

impl SearchMusclesTool {
    pub const NAME: &'static str = "search_muscles";

    pub fn new(client: MusclesWorkedClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for SearchMusclesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.to_string(),
            description: "Search for muscles by name. Returns matching muscle IDs and names. \
                Use this to discover muscle IDs before calling find_exercises."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "query": json_schema_string_min(MIN_QUERY_CHARS, "Search query (e.g. 'chest', 'bicep', 'quad')")
                }),
                vec!["query"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args = SearchArgs::validate(arguments)
            .map_err(|errors| ToolError::invalid(Self::NAME, errors))?;

        let result = self.client.search().muscles(&args.query).await;
        Ok(into_tool_result(Self::NAME, result))
    }
}
