// Startup configuration for the MCP server

use clap::Parser;
use musclesworked_sdk::{MusclesWorkedClient, MusclesWorkedResult, DEFAULT_BASE_URL};

pub const API_KEY_ENV: &str = "MUSCLESWORKED_API_KEY";
pub const API_URL_ENV: &str = "MUSCLESWORKED_API_URL";

/// Client identifier sent to the API.
pub const USER_AGENT: &str = concat!("musclesworked-mcp/", env!("CARGO_PKG_VERSION"));

#[derive(Parser, Debug)]
#[command(name = "musclesworked-mcp")]
#[command(version, about = "MCP server for the musclesworked.com exercise and muscle API", long_about = None)]
pub struct Args {
    /// API key (falls back to MUSCLESWORKED_API_KEY)
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API base URL (falls back to MUSCLESWORKED_API_URL)
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub api_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "API key required.\n\n\
         Provide it via --api-key or MUSCLESWORKED_API_KEY env var:\n  \
         musclesworked-mcp --api-key mw_live_...\n  \
         MUSCLESWORKED_API_KEY=mw_live_... musclesworked-mcp\n\n\
         Get your API key at https://musclesworked.com/dashboard"
    )]
    MissingApiKey,
}

/// Resolved server configuration, fixed for the lifetime of the process.
#[derive(Clone)]
pub struct ServerConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ServerConfig {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        Self::resolve(args, std::env::var(API_KEY_ENV).ok())
    }

    /// `--api-key` wins over the environment. An empty value counts as unset;
    /// anything else is used exactly as given.
    fn resolve(args: Args, env_api_key: Option<String>) -> Result<Self, ConfigError> {
        let api_key = args
            .api_key
            .filter(|key| !key.is_empty())
            .or(env_api_key.filter(|key| !key.is_empty()))
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            base_url: args.api_url,
        })
    }

    /// Build the API client this configuration describes.
    pub fn client(&self) -> MusclesWorkedResult<MusclesWorkedClient> {
        MusclesWorkedClient::builder()
            .base_url(&self.base_url)
            .api_key(&self.api_key)
            .user_agent(USER_AGENT)
            .build()
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
