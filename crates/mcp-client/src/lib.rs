//! Client for MCP tool servers
//!
//! [`McpClient`] speaks the JSON-RPC envelope served at `/mcp/invoke` and
//! reads the discovery document at `/mcp/tools`. [`run_task_demo`] walks a
//! task manager server through a full task lifecycle.

pub mod client;
pub mod demo;
pub mod error;

pub use client::{DEFAULT_TIMEOUT, McpClient};
pub use demo::{DemoStep, run_task_demo};
pub use error::{ClientError, Result};

/// Server URL used when neither `--url` nor `MCP_SERVER_URL` is given
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
