//! Main client for the musclesworked SDK.

use crate::api::*;
use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::error::{MusclesWorkedError, MusclesWorkedResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use url::Url;

/// Client for the musclesworked.com API.
///
/// Cheap to clone; clones share the connection pool and configuration.
#[derive(Clone, Debug)]
pub struct MusclesWorkedClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl MusclesWorkedClient {
    /// Create a new client builder.
    pub fn builder() -> MusclesWorkedClientBuilder {
        MusclesWorkedClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> MusclesWorkedResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Normalized base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Underlying transport, for requests outside the typed endpoint groups.
    pub fn transport(&self) -> &HttpTransport {
        &self.http
    }

    /// Get the exercises API.
    pub fn exercises(&self) -> ExercisesApi<'_> {
        ExercisesApi::new(self)
    }

    /// Get the muscles API.
    pub fn muscles(&self) -> MusclesApi<'_> {
        MusclesApi::new(self)
    }

    /// Get the workouts API.
    pub fn workouts(&self) -> WorkoutsApi<'_> {
        WorkoutsApi::new(self)
    }

    /// Get the search API.
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }
}

/// Builder for creating a MusclesWorkedClient.
pub struct MusclesWorkedClientBuilder {
    base_url: String,
    api_key: Option<String>,
    user_agent: String,
}

impl MusclesWorkedClientBuilder {
    /// Create a new builder pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the base URL of the API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key (required).
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the client identifier sent as `User-Agent`.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client.
    pub fn build(self) -> MusclesWorkedResult<MusclesWorkedClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| MusclesWorkedError::Config("api_key is required".to_string()))?;

        Url::parse(&self.base_url)?;

        let mut config = ClientConfig::new(&self.base_url, api_key);
        config.user_agent = self.user_agent;

        MusclesWorkedClient::from_config(config)
    }
}

impl Default for MusclesWorkedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_production() {
        let client = MusclesWorkedClient::builder()
            .api_key("mw_live_abc")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://musclesworked.com");
    }

    #[test]
    fn test_builder_normalizes_base_url() {
        let client = MusclesWorkedClient::builder()
            .base_url("http://localhost:8000//")
            .api_key("mw_test")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = MusclesWorkedClient::builder().build();
        assert!(matches!(result, Err(MusclesWorkedError::Config(_))));

        let result = MusclesWorkedClient::builder().api_key("  ").build();
        assert!(matches!(result, Err(MusclesWorkedError::Config(_))));
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let result = MusclesWorkedClient::builder()
            .base_url("not a url")
            .api_key("mw_test")
            .build();

        assert!(matches!(result, Err(MusclesWorkedError::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_custom_user_agent() {
        let client = MusclesWorkedClient::builder()
            .api_key("mw_test")
            .user_agent("musclesworked-mcp/0.1.0")
            .build()
            .unwrap();

        assert_eq!(client.transport().config().user_agent, "musclesworked-mcp/0.1.0");
    }
}
