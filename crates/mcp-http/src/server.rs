//! HTTP tool server
//!
//! Wraps a [`ToolRegistry`] behind an axum router. Every request to
//! `/mcp/invoke` is answered with a JSON-RPC envelope, whatever the body.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::Json;
use mcp_registry::{ToolRegistry, outcome_to_value};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, InitializeResult, InvokeParams, JsonRpcRequest,
    JsonRpcResponse, METHOD_NOT_FOUND, PARSE_ERROR, ServerCapabilities, ServerInfo,
    ToolsCapability,
};
use crate::{Error, Result};

/// Protocol revision reported by `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// A tool registry exposed over HTTP.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use mcp_http::{ServerConfig, ServerInfo, ToolServer, shutdown_signal};
/// use mcp_registry::ToolRegistry;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let registry = Arc::new(ToolRegistry::new());
///     let server = ToolServer::new(ServerInfo::new("demo", "Demo server", "0.1.0"), registry);
///     server.serve(&ServerConfig::with_port(3000), shutdown_signal()).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ToolServer {
    info: ServerInfo,
    registry: Arc<ToolRegistry>,
}

impl ToolServer {
    pub fn new(info: ServerInfo, registry: Arc<ToolRegistry>) -> Self {
        Self { info, registry }
    }

    pub fn info(&self) -> &ServerInfo {
        &self.info
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Build the axum router for this server
    pub fn router(self) -> Router {
        Router::new()
            .route("/mcp/invoke", post(invoke_endpoint))
            .route("/mcp/tools", get(tools_endpoint))
            .route("/health", get(health))
            .with_state(Arc::new(self))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Handle a single JSON-RPC message body.
    ///
    /// Never fails: malformed input is answered with a JSON-RPC error
    /// envelope so the transport can always reply with parseable JSON.
    pub async fn handle_message(&self, body: &[u8]) -> JsonRpcResponse {
        let raw: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!(error = %e, "Rejecting unparseable request body");
                return JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {}", e));
            }
        };

        let id = raw.get("id").cloned();
        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(r) => r,
            Err(e) => {
                return JsonRpcResponse::error(
                    id,
                    INVALID_REQUEST,
                    format!("Invalid request: {}", e),
                );
            }
        };

        tracing::debug!(method = %request.method, "Received request");

        match request.method.as_str() {
            "invoke" | "tools/call" => self.handle_invoke(request.id, request.params).await,
            "describe" | "tools/list" => {
                JsonRpcResponse::success(request.id, json!({ "tools": self.registry.describe() }))
            }
            "initialize" => self.handle_initialize(request.id),
            _ => JsonRpcResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        }
    }

    async fn handle_invoke(&self, id: Option<Value>, params: Value) -> JsonRpcResponse {
        let params: InvokeParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => {
                return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {}", e));
            }
        };

        let outcome = self.registry.invoke(&params.name, params.parameters).await;
        match &outcome {
            Ok(_) => tracing::info!(tool = %params.name, "Tool invoked"),
            Err(e) => tracing::info!(tool = %params.name, kind = e.kind(), error = %e, "Tool failed"),
        }

        JsonRpcResponse::success(id, outcome_to_value(outcome))
    }

    fn handle_initialize(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: self.info.clone(),
        };
        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, e.to_string()),
        }
    }

    /// Discovery document served at `/mcp/tools`
    pub fn discovery(&self) -> Value {
        json!({
            "name": self.info.name,
            "description": self.info.description,
            "version": self.info.version,
            "tools": self.registry.describe(),
        })
    }

    /// Bind according to `config` and serve until `shutdown` resolves
    pub async fn serve<F>(self, config: &ServerConfig, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
        let addr = listener.local_addr()?;
        tracing::info!(server = %self.info.name, %addr, tools = self.registry.len(), "Serving MCP tools");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }

    /// Serve in a background task on `addr` (port 0 picks a free port)
    pub async fn spawn(self, addr: SocketAddr) -> Result<RunningServer> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let router = self.router();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        Ok(RunningServer {
            addr,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        })
    }
}

/// Handle to a server started with [`ToolServer::spawn`].
///
/// Dropping the handle signals shutdown.
#[derive(Debug)]
pub struct RunningServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<std::io::Result<()>>>,
}

impl RunningServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL, e.g. `http://127.0.0.1:41234`
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Signal shutdown and wait for the server task to finish
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(sender) = self.shutdown.take() {
            let _ = sender.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle
                .await
                .map_err(|e| Error::Io(std::io::Error::other(e)))??;
        }
        Ok(())
    }
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        if let Some(sender) = self.shutdown.take() {
            let _ = sender.send(());
        }
    }
}

/// Resolves on Ctrl-C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn invoke_endpoint(
    State(server): State<Arc<ToolServer>>,
    body: Bytes,
) -> Json<JsonRpcResponse> {
    Json(server.handle_message(&body).await)
}

async fn tools_endpoint(State(server): State<Arc<ToolServer>>) -> Json<Value> {
    Json(server.discovery())
}

async fn health() -> &'static str {
    "ok"
}
