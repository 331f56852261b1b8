//! Task Manager MCP client
//!
//! Walks a running task manager server through listing, creating,
//! completing and deleting a task, printing each answer as JSON.
//!
//! # Usage
//!
//! ```bash
//! task-client [--url <server>]
//! ```
//!
//! # Environment Variables
//!
//! - `MCP_SERVER_URL`: Server base URL (default: `http://localhost:3000`)
//! - `RUST_LOG`: Control log verbosity (default: `mcp_client=warn`)

use clap::Parser;
use mcp_client::{DEFAULT_SERVER_URL, McpClient, run_task_demo};
use mcp_http::init_tracing;

/// Task Manager MCP client walkthrough
#[derive(Parser)]
#[command(name = "task-client")]
#[command(about = "Drive a Task Manager MCP server through a task lifecycle")]
#[command(version)]
struct Args {
    /// Base URL of the task manager server
    #[arg(long, env = "MCP_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("mcp_client=warn")?;

    let args = Args::parse();
    let client = McpClient::new(&args.url)?;

    println!("Task Manager MCP client");
    println!("Server: {}", client.base_url());
    println!("---\n");

    let steps = match run_task_demo(&client).await {
        Ok(steps) => steps,
        Err(e) => {
            eprintln!("Error in task manager walkthrough: {}", e);
            std::process::exit(1);
        }
    };

    for (i, step) in steps.iter().enumerate() {
        println!("{}. {}:", i + 1, step.title);
        println!("{}", serde_json::to_string_pretty(&step.result)?);
        println!("\n---\n");
    }
    println!("Walkthrough completed.");

    Ok(())
}
