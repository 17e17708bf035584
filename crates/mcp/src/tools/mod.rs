pub mod args;
pub mod exercises;
pub mod muscles;
pub mod response;
pub mod search;
pub mod workouts;
mod registry;

pub use exercises::{GetAlternativesTool, GetMusclesWorkedTool};
pub use muscles::FindExercisesTool;
pub use registry::{
    json_schema_array, json_schema_enum, json_schema_integer, json_schema_object,
    json_schema_string, json_schema_string_min, Tool, ToolError, ToolRegistry,
};
pub use search::{SearchExercisesTool, SearchMusclesTool};
pub use workouts::AnalyzeWorkoutTool;

use musclesworked_sdk::MusclesWorkedClient;
use std::sync::Arc;

/// Register the full musclesworked tool catalog.
pub fn register_tools(registry: &mut ToolRegistry, client: &MusclesWorkedClient) {
    registry.register(Arc::new(GetMusclesWorkedTool::new(client.clone())));
    registry.register(Arc::new(FindExercisesTool::new(client.clone())));
    registry.register(Arc::new(AnalyzeWorkoutTool::new(client.clone())));
    registry.register(Arc::new(GetAlternativesTool::new(client.clone())));
    registry.register(Arc::new(SearchExercisesTool::new(client.clone())));
    registry.register(Arc::new(SearchMusclesTool::new(client.clone())));
}
