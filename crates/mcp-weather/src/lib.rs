//! Weather Service MCP server
//!
//! Answers weather questions from a fixed table of sample data for
//! New York, London and Tokyo. Location names match case-insensitively
//! per word; dates match exactly.

use std::sync::Arc;

use mcp_http::{ServerInfo, ToolServer};
use mcp_registry::ToolRegistry;

pub mod service;
pub mod table;
pub mod tools;

pub use service::{MAX_FORECAST_DAYS, WeatherService};
pub use table::{CurrentWeather, ForecastDay, HistoricalDay, LocationWeather, WeatherTable};
pub use tools::register_tools;

/// Default port for the weather binary
pub const DEFAULT_PORT: u16 = 3002;

/// Server answering from `service`
pub fn weather_server(service: Arc<WeatherService>) -> ToolServer {
    let registry = ToolRegistry::new();
    register_tools(&registry, service);
    ToolServer::new(
        ServerInfo::new(
            "Weather Service MCP",
            "MCP server for retrieving weather information",
            env!("CARGO_PKG_VERSION"),
        ),
        Arc::new(registry),
    )
}
