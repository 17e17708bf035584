// Turning API results into tool results

use crate::protocol::CallToolResult;
use musclesworked_sdk::{MusclesWorkedError, MusclesWorkedResult};

pub const INVALID_API_KEY_MESSAGE: &str = "Invalid API key. Check your MUSCLESWORKED_API_KEY.";
pub const NOT_APPROVED_MESSAGE: &str =
    "Account not approved. Visit musclesworked.com to check your status.";
pub const RATE_LIMITED_MESSAGE: &str = "Rate limit exceeded. Please wait before retrying.";
pub const UNAVAILABLE_MESSAGE: &str = "API temporarily unavailable. Try again shortly.";

/// Agent-facing text for a failed API call.
pub fn format_error(error: &MusclesWorkedError) -> String {
    match error {
        MusclesWorkedError::Api { status, detail } => match status {
            401 => INVALID_API_KEY_MESSAGE.to_string(),
            403 => NOT_APPROVED_MESSAGE.to_string(),
            429 => RATE_LIMITED_MESSAGE.to_string(),
            s if *s >= 500 => UNAVAILABLE_MESSAGE.to_string(),
            _ => detail.clone(),
        },
        other => other.to_string(),
    }
}

/// Pretty-printed payload on success, formatted error text otherwise.
pub fn into_tool_result(tool: &str, result: MusclesWorkedResult<serde_json::Value>) -> CallToolResult {
    match result.and_then(|payload| Ok(serde_json::to_string_pretty(&payload)?)) {
        Ok(text) => CallToolResult::success(text),
        Err(e) => {
            tracing::warn!(tool = tool, status = ?e.status(), error = %e, "Tool call failed");
            CallToolResult::error(format_error(&e))
        }
    }
}
