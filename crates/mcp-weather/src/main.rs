//! Weather Service MCP Server
//!
//! # Usage
//!
//! ```bash
//! weather-mcp [--host <addr>] [--port <port>] [--config <file>]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `mcp_weather=info,mcp_http=info`)
//! - `MCP_HOST`, `MCP_PORT`: Bind address overrides

use std::sync::Arc;

use clap::Parser;
use mcp_http::{ServeArgs, init_tracing, shutdown_signal};
use mcp_weather::{DEFAULT_PORT, WeatherService, weather_server};

/// MCP server for retrieving weather information
#[derive(Parser)]
#[command(name = "weather-mcp")]
#[command(about = "MCP server for retrieving weather information")]
#[command(version)]
struct Args {
    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("mcp_weather=info,mcp_http=info")?;

    let args = Args::parse();
    let config = args.serve.resolve(DEFAULT_PORT)?;

    let service = Arc::new(WeatherService::default());
    tracing::info!(
        address = %config.address(),
        locations = service.table().len(),
        "Starting weather server"
    );

    weather_server(service).serve(&config, shutdown_signal()).await?;

    Ok(())
}
