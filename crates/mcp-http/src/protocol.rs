//! JSON-RPC message types
//!
//! JSON-RPC 2.0 envelope used by the `/mcp/invoke` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parse error: the body was not valid JSON
pub const PARSE_ERROR: i32 = -32700;
/// The JSON was not a valid request object
pub const INVALID_REQUEST: i32 = -32600;
/// Unknown method
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Method params could not be interpreted
pub const INVALID_PARAMS: i32 = -32602;
/// Server-side failure while building a response
pub const INTERNAL_ERROR: i32 = -32603;

/// JSON-RPC 2.0 Request
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// JSON-RPC 2.0 Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Params of an `invoke` request.
///
/// `arguments` is accepted as an alias of `parameters` so that clients
/// speaking the `tools/call` dialect work unchanged.
#[derive(Debug, Deserialize)]
pub struct InvokeParams {
    pub name: String,
    #[serde(default, alias = "arguments")]
    pub parameters: Value,
}

/// Server identity reported by `initialize` and discovery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub description: String,
    pub version: String,
}

impl ServerInfo {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            version: version.into(),
        }
    }
}

/// Initialize response result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: ToolsCapability,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsCapability {
    pub list_changed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_defaults_missing_params() {
        let request: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1, "method": "describe"}))
                .unwrap();
        assert_eq!(request.params, Value::Null);
        assert_eq!(request.id, Some(json!(1)));
    }

    #[test]
    fn invoke_params_accept_arguments_alias() {
        let params: InvokeParams =
            serde_json::from_value(json!({"name": "t", "arguments": {"a": 1}})).unwrap();
        assert_eq!(params.parameters, json!({"a": 1}));
    }

    #[test]
    fn error_response_omits_result() {
        let response = JsonRpcResponse::error(None, METHOD_NOT_FOUND, "Method not found: x");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], Value::Null);
        assert!(value.get("result").is_none());
        assert_eq!(value["error"]["code"], -32601);
    }
}
