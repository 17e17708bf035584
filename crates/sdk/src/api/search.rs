//! Free-text search endpoints.

use crate::client::MusclesWorkedClient;
use crate::error::MusclesWorkedResult;
use crate::transport::ApiRequest;

/// Search API for discovering exercise and muscle IDs.
pub struct SearchApi<'a> {
    client: &'a MusclesWorkedClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a MusclesWorkedClient) -> Self {
        Self { client }
    }

    /// Search exercises by name.
    pub async fn exercises(&self, query: &str) -> MusclesWorkedResult<serde_json::Value> {
        self.search("exercises", query).await
    }

    /// Search muscles by name.
    pub async fn muscles(&self, query: &str) -> MusclesWorkedResult<serde_json::Value> {
        self.search("muscles", query).await
    }

    async fn search(&self, kind: &str, query: &str) -> MusclesWorkedResult<serde_json::Value> {
        let request = ApiRequest::get(format!("/api/v1/search/{}", kind)).query("q", query);
        self.client.http.execute(request).await
    }
}
