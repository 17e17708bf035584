//! Muscle endpoints.

use crate::client::MusclesWorkedClient;
use crate::error::MusclesWorkedResult;
use crate::transport::ApiRequest;
use crate::types::{Choice, Difficulty, Equipment, ExerciseType, MovementPattern, MuscleRole};

/// Muscles API: exercises that target a muscle.
pub struct MusclesApi<'a> {
    client: &'a MusclesWorkedClient,
}

impl<'a> MusclesApi<'a> {
    pub(crate) fn new(client: &'a MusclesWorkedClient) -> Self {
        Self { client }
    }

    /// Exercises targeting a muscle, narrowed by optional filters.
    pub async fn exercises(
        &self,
        muscle: &str,
        filters: &FindExercisesFilters,
    ) -> MusclesWorkedResult<serde_json::Value> {
        let path = format!("/api/v1/muscles/{}/exercises", urlencoding::encode(muscle));
        let request = ApiRequest::get(path).with_query(filters.to_query());
        self.client.http.execute(request).await
    }
}

/// Optional filters for [`MusclesApi::exercises`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindExercisesFilters {
    pub equipment: Option<Equipment>,
    pub difficulty: Option<Difficulty>,
    pub movement_pattern: Option<MovementPattern>,
    pub exercise_type: Option<ExerciseType>,
    pub role: Option<MuscleRole>,
    pub limit: Option<u32>,
}

impl FindExercisesFilters {
    /// Query parameters for the filters that are set, in a fixed order.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(equipment) = self.equipment {
            params.push(("equipment", equipment.as_str().to_string()));
        }
        if let Some(difficulty) = self.difficulty {
            params.push(("difficulty", difficulty.as_str().to_string()));
        }
        if let Some(pattern) = self.movement_pattern {
            params.push(("movement_pattern", pattern.as_str().to_string()));
        }
        if let Some(exercise_type) = self.exercise_type {
            params.push(("exercise_type", exercise_type.as_str().to_string()));
        }
        if let Some(role) = self.role {
            params.push(("role", role.as_str().to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }

        params
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
