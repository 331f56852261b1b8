//! Task Manager MCP Server
//!
//! Serves the task tools over HTTP, backed by an in-memory store seeded
//! with two example tasks. Tasks are lost when the process exits.
//!
//! # Usage
//!
//! ```bash
//! task-manager-mcp [--host <addr>] [--port <port>] [--config <file>]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `mcp_task_manager=info,mcp_http=info`)
//! - `MCP_HOST`, `MCP_PORT`: Bind address overrides

use std::sync::Arc;

use clap::Parser;
use mcp_http::{ServeArgs, init_tracing, shutdown_signal};
use mcp_task_manager::{DEFAULT_PORT, TaskStore, task_server};

/// MCP server for managing tasks
#[derive(Parser)]
#[command(name = "task-manager-mcp")]
#[command(about = "MCP server for managing tasks")]
#[command(version)]
struct Args {
    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("mcp_task_manager=info,mcp_http=info")?;

    let args = Args::parse();
    let config = args.serve.resolve(DEFAULT_PORT)?;

    let store = Arc::new(TaskStore::with_examples());
    tracing::info!(address = %config.address(), tasks = store.len(), "Starting task manager server");

    task_server(store).serve(&config, shutdown_signal()).await?;

    Ok(())
}
