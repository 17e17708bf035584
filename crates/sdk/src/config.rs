//! Configuration types for the musclesworked SDK.

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://musclesworked.com";

/// Client identifier sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("musclesworked-sdk/", env!("CARGO_PKG_VERSION"));

/// Configuration for the musclesworked client.
///
/// Built once by [`crate::MusclesWorkedClientBuilder`] and shared read-only by
/// every request afterwards.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL without trailing slashes.
    pub base_url: String,
    /// API key sent as `X-Api-Key`.
    pub api_key: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration, normalizing the base URL.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            api_key: api_key.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Full URL for an API path such as `/api/v1/search/muscles`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// Keep the key out of debug output.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Strip every trailing slash from a base URL.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
