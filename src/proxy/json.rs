use crate::{Error, Result};
use serde_json::Value;
use tracing::error;

/// Removes every "```json" and "```" marker, then trims surrounding whitespace.
/// Text without fences only gets trimmed.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parses a model reply as JSON after fence stripping. Never returns a
/// partial value; on failure the raw reply is logged and kept in the error.
pub fn parse_json_reply(text: &str) -> Result<Value> {
    let cleaned = strip_code_fences(text);
    serde_json::from_str(&cleaned).map_err(|e| {
        error!(raw = %text, "Failed to parse JSON reply: {}", e);
        Error::JsonParse {
            raw: text.to_string(),
            reason: e.to_string(),
        }
    })
}
