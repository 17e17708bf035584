//! Workout analysis endpoint.

use crate::client::MusclesWorkedClient;
use crate::error::MusclesWorkedResult;
use crate::transport::ApiRequest;
use serde::Serialize;

/// Workouts API.
pub struct WorkoutsApi<'a> {
    client: &'a MusclesWorkedClient,
}

impl<'a> WorkoutsApi<'a> {
    pub(crate) fn new(client: &'a MusclesWorkedClient) -> Self {
        Self { client }
    }

    /// Muscle coverage, gaps and imbalances across a list of exercises.
    ///
    /// Callers are expected to pass at least one exercise.
    pub async fn analyze(&self, exercises: &[String]) -> MusclesWorkedResult<serde_json::Value> {
        let body = serde_json::to_value(AnalyzeWorkoutRequest { exercises })?;
        self.client
            .http
            .execute(ApiRequest::post("/api/v1/workouts/analyze", body))
            .await
    }
}

/// Request body for workout analysis.
#[derive(Debug, Serialize)]
struct AnalyzeWorkoutRequest<'a> {
    exercises: &'a [String],
}
