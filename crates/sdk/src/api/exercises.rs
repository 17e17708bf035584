//! Exercise endpoints.

use crate::client::MusclesWorkedClient;
use crate::error::MusclesWorkedResult;
use crate::transport::ApiRequest;

/// Exercises API: muscle involvement and substitutes for one exercise.
pub struct ExercisesApi<'a> {
    client: &'a MusclesWorkedClient,
}

impl<'a> ExercisesApi<'a> {
    pub(crate) fn new(client: &'a MusclesWorkedClient) -> Self {
        Self { client }
    }

    /// Primary, secondary and stabilizer muscles worked by an exercise.
    pub async fn muscles_worked(&self, exercise: &str) -> MusclesWorkedResult<serde_json::Value> {
        let path = format!("/api/v1/exercises/{}/muscles", urlencoding::encode(exercise));
        self.client.http.execute(ApiRequest::get(path)).await
    }

    /// Alternative exercises ranked by muscle overlap.
    ///
    /// `limit` is sent only when given; the server applies its own default.
    pub async fn alternatives(
        &self,
        exercise: &str,
        limit: Option<u32>,
    ) -> MusclesWorkedResult<serde_json::Value> {
        let path = format!("/api/v1/exercises/{}/alternatives", urlencoding::encode(exercise));
        let mut request = ApiRequest::get(path);
        if let Some(limit) = limit {
            request = request.query("limit", limit);
        }
        self.client.http.execute(request).await
    }
}
