//! HTTP transport for MCP tool registries
//!
//! Mounts a [`mcp_registry::ToolRegistry`] on an axum router:
//!
//! - `POST /mcp/invoke` - JSON-RPC 2.0 (`invoke`, `describe`, `initialize`)
//! - `GET /mcp/tools` - discovery document
//! - `GET /health` - liveness probe
//!
//! Also carries the pieces every server binary shares: [`ServeArgs`] for the
//! command line, [`ServerConfig`] and [`init_tracing`].

pub mod config;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod server;

pub use config::{ServeArgs, ServerConfig};
pub use error::{Error, Result};
pub use logging::init_tracing;
pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, ServerInfo};
pub use server::{RunningServer, ToolServer, shutdown_signal};
