// Workout analysis tool

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::args::{parse_arguments, Checks, ValidationErrors};
use crate::tools::response::into_tool_result;
use crate::tools::{json_schema_array, json_schema_object, json_schema_string, Tool, ToolError};
use musclesworked_sdk::MusclesWorkedClient;
use serde::Deserialize;

/// Tool to analyze a workout for coverage, gaps and imbalances
pub struct AnalyzeWorkoutTool {
    client: MusclesWorkedClient,
}

impl AnalyzeWorkoutTool {
    pub const NAME: &'static str = "analyze_workout";

    pub fn new(client: MusclesWorkedClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct AnalyzeWorkoutArgs {
    pub exercises: Vec<String>,
}

impl AnalyzeWorkoutArgs {
    pub fn validate(arguments: serde_json::Value) -> Result<Self, ValidationErrors> {
        let args: Self = parse_arguments(arguments)?;

        let mut checks = Checks::new();
        checks.min_items("exercises", &args.exercises, 1);
        checks.finish()?;

        Ok(args)
    }
}

#[async_trait::async_trait]
impl Tool for AnalyzeWorkoutTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.to_string(),
            description: "Analyze a workout for muscle coverage, gaps, and imbalances. \
                Pass a list of exercise names or IDs."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "exercises": json_schema_array(
                        json_schema_string("Exercise ID or name"),
                        1,
                        "List of exercise IDs or names"
                    )
                }),
                vec!["exercises"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args = AnalyzeWorkoutArgs::validate(arguments)
            .map_err(|errors| ToolError::invalid(Self::NAME, errors))?;

        tracing::debug!(count = args.exercises.len(), "Analyzing workout");
        let result = self.client.workouts().analyze(&args.exercises).await;
        Ok(into_tool_result(Self::NAME, result))
    }
}
