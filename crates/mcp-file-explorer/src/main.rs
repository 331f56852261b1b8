//! File Explorer MCP Server
//!
//! # Usage
//!
//! ```bash
//! file-explorer-mcp [--root <path>] [--host <addr>] [--port <port>] [--config <file>]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `mcp_file_explorer=info,mcp_http=info`)
//! - `MCP_HOST`, `MCP_PORT`: Bind address overrides

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use mcp_file_explorer::{DEFAULT_PORT, FileExplorer, file_server};
use mcp_http::{ServeArgs, init_tracing, shutdown_signal};

/// MCP server for browsing and manipulating files
#[derive(Parser)]
#[command(name = "file-explorer-mcp")]
#[command(about = "MCP server for browsing and manipulating files")]
#[command(version)]
struct Args {
    /// Base directory for relative paths
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("mcp_file_explorer=info,mcp_http=info")?;

    let args = Args::parse();
    let config = args.serve.resolve(DEFAULT_PORT)?;

    tracing::info!(root = ?args.root, address = %config.address(), "Starting file explorer server");

    let explorer = Arc::new(FileExplorer::new(args.root));
    file_server(explorer).serve(&config, shutdown_signal()).await?;

    Ok(())
}
