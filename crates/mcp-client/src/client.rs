//! JSON-RPC over HTTP client for MCP tool servers

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use mcp_http::JsonRpcResponse;
use serde_json::{Value, json};

use crate::error::{ClientError, Result};

/// Per-request timeout applied by [`McpClient::new`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for one MCP server
#[derive(Debug)]
pub struct McpClient {
    base_url: String,
    http: reqwest::Client,
    next_id: AtomicU64,
}

impl McpClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self::with_client(base_url, http))
    }

    /// Use a preconfigured `reqwest` client
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Invoke `name` and return the server's `result`.
    ///
    /// Tool-level failures (`{success:false, error}`) are returned as
    /// values; only transport and JSON-RPC errors are `Err`.
    pub async fn call_tool(&self, name: &str, params: Value) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id.to_string(),
            "method": "invoke",
            "params": { "name": name, "parameters": params },
        });

        tracing::debug!(tool = name, id, "Calling tool");
        let response: JsonRpcResponse = self
            .http
            .post(self.endpoint("/mcp/invoke"))
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.error {
            tracing::warn!(tool = name, code = error.code, message = %error.message, "Tool call rejected");
            return Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        response.result.ok_or(ClientError::MissingResult)
    }

    /// Tool descriptions from the discovery endpoint
    pub async fn list_tools(&self) -> Result<Vec<Value>> {
        let mut doc: Value = self
            .http
            .get(self.endpoint("/mcp/tools"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match doc.get_mut("tools").map(Value::take) {
            Some(Value::Array(tools)) => Ok(tools),
            _ => Err(ClientError::UnexpectedResponse {
                tool: "/mcp/tools".to_string(),
                reason: "missing tools array".to_string(),
            }),
        }
    }
}
