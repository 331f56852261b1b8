//! Placeholder Task Manager MCP Server
//!
//! Answers the task tools with canned data and addresses tasks by
//! `task_id`. Nothing is stored between calls.

use clap::Parser;
use mcp_http::{ServeArgs, init_tracing, shutdown_signal};
use mcp_task_manager::{DEFAULT_PORT, stub_server};

/// Placeholder MCP server for the Task Manager application
#[derive(Parser)]
#[command(name = "task-manager-stub-mcp")]
#[command(about = "Placeholder MCP server for the Task Manager application")]
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

    tracing::info!(address = %config.address(), "Starting placeholder task manager server");
    stub_server().serve(&config, shutdown_signal()).await?;

    Ok(())
}
