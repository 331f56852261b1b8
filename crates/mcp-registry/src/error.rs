//! Error types for tool invocation

use serde_json::{Value, json};
use thiserror::Error;

/// Result of a tool invocation.
///
/// `Ok` carries the handler's JSON payload, `Err` carries a tagged failure.
/// Both sides are plain values: nothing about an invocation is allowed to
/// escape as a panic or an unhandled fault.
pub type ToolResult = std::result::Result<Value, ToolError>;

/// Failures surfaced at the registry boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// No tool is registered under the requested name
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The parameter object could not be interpreted by the handler
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// The handler ran but could not complete; the message is shown verbatim
    #[error("{0}")]
    Handler(String),
}

impl ToolError {
    /// Create a handler failure from any displayable message
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler(message.into())
    }

    /// Create an invalid-parameters failure
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams(message.into())
    }

    /// Stable machine-readable tag for this failure
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::NotFound(_) => "tool_not_found",
            ToolError::InvalidParams(_) => "invalid_params",
            ToolError::Handler(_) => "handler_failure",
        }
    }

    /// Render the failure as the wire payload `{success: false, error}`
    pub fn to_value(&self) -> Value {
        json!({
            "success": false,
            "error": self.to_string(),
        })
    }
}

/// Collapse an invocation result into the JSON payload sent to callers
pub fn outcome_to_value(outcome: ToolResult) -> Value {
    match outcome {
        Ok(value) => value,
        Err(e) => e.to_value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_message_is_verbatim() {
        let err = ToolError::handler("Task with ID 7 not found");
        assert_eq!(err.to_string(), "Task with ID 7 not found");
        assert_eq!(err.kind(), "handler_failure");
    }

    #[test]
    fn not_found_value_shape() {
        let value = ToolError::NotFound("nope".into()).to_value();
        assert_eq!(value, json!({"success": false, "error": "Tool not found: nope"}));
    }

    #[test]
    fn outcome_passes_success_through() {
        let value = outcome_to_value(Ok(json!({"success": true})));
        assert_eq!(value["success"], true);
    }
}
