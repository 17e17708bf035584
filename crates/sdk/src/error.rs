//! Error types for the musclesworked SDK.

use reqwest::StatusCode;
use serde::Deserialize;

/// Result type for SDK operations.
pub type MusclesWorkedResult<T> = Result<T, MusclesWorkedError>;

/// Error types that can occur when calling the musclesworked API.
#[derive(Debug, thiserror::Error)]
pub enum MusclesWorkedError {
    /// The request never produced a usable response (DNS, connect, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error {status}: {detail}")]
    Api { status: u16, detail: String },

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl MusclesWorkedError {
    /// Build an API error from a non-success status and the raw response body.
    ///
    /// The `detail` field of a JSON body wins; otherwise the standard reason
    /// phrase of the status is used.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|response| response.detail)
            .and_then(|detail| match detail {
                serde_json::Value::Null => None,
                serde_json::Value::String(text) => Some(text),
                other => Some(other.to_string()),
            })
            .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());

        Self::Api {
            status: status.as_u16(),
            detail,
        }
    }

    /// HTTP status carried by an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the remote API answered with an error status.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

/// Error body returned by the musclesworked API.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}
