// Muscle tools: exercises that target a muscle

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::args::{parse_arguments, Checks, ValidationErrors};
use crate::tools::response::into_tool_result;
use crate::tools::{
    json_schema_enum, json_schema_integer, json_schema_object, json_schema_string, Tool, ToolError,
};
use musclesworked_sdk::{
    Choice, Difficulty, Equipment, ExerciseType, FindExercisesFilters, MovementPattern,
    MusclesWorkedClient, MuscleRole,
};
use serde::Deserialize;

/// Tool to find exercises for a muscle
pub struct FindExercisesTool {
    client: MusclesWorkedClient,
}

impl FindExercisesTool {
    pub const NAME: &'static str = "find_exercises";

    pub fn new(client: MusclesWorkedClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct FindExercisesArgs {
    pub muscle: String,
    #[serde(default)]
    pub equipment: Option<Equipment>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub movement_pattern: Option<MovementPattern>,
    #[serde(default)]
    pub exercise_type: Option<ExerciseType>,
    #[serde(default)]
    pub role: Option<MuscleRole>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl FindExercisesArgs {
    pub fn validate(arguments: serde_json::Value) -> Result<Self, ValidationErrors> {
        let args: Self = parse_arguments(arguments)?;

        let mut checks = Checks::new();
        checks.range("limit", args.limit, 1..=200);
        checks.finish()?;

        Ok(args)
    }

    pub fn filters(&self) -> FindExercisesFilters {
        FindExercisesFilters {
            equipment: self.equipment,
            difficulty: self.difficulty,
            movement_pattern: self.movement_pattern,
            exercise_type: self.exercise_type,
            role: self.role,
            limit: self.limit,
        }
    }
}

#[async_trait::async_trait]
impl Tool for FindExercisesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.to_string(),
            description: "Find exercises that target a specific muscle, with optional filters. \
                Use search_muscles first if you don't know the muscle ID."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "muscle": json_schema_string("Muscle ID or name (e.g. 'pectoralis_major_sternal')"),
                    "equipment": json_schema_enum(Equipment::names(), "Filter by equipment type"),
                    "difficulty": json_schema_enum(Difficulty::names(), "Filter by difficulty level"),
                    "movement_pattern": json_schema_enum(MovementPattern::names(), "Filter by movement pattern"),
                    "exercise_type": json_schema_enum(ExerciseType::names(), "Filter by exercise type"),
                    "role": json_schema_enum(MuscleRole::names(), "Filter by muscle role"),
                    "limit": json_schema_integer(1, 200, "Max results (default: 50)")
                }),
                vec!["muscle"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult, ToolError> {
        let args = FindExercisesArgs::validate(arguments)
            .map_err(|errors| ToolError::invalid(Self::NAME, errors))?;

        let filters = args.filters();
        tracing::debug!(muscle = %args.muscle, filters = ?filters, "Finding exercises");
        let result = self.client.muscles().exercises(&args.muscle, &filters).await;
        Ok(into_tool_result(Self::NAME, result))
    }
}
