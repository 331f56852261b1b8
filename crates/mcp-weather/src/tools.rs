//! Weather tools backed by a [`WeatherService`]

use std::sync::Arc;

use mcp_registry::params::optional_whole_number;
use mcp_registry::{ParameterSchema, Property, ToolDescriptor, ToolRegistry};
use serde::Deserialize;

use crate::service::WeatherService;

#[derive(Debug, Deserialize)]
struct CurrentArgs {
    location: String,
}

#[derive(Debug, Deserialize)]
struct ForecastArgs {
    location: String,
    #[serde(default, deserialize_with = "optional_whole_number")]
    days: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct HistoricalArgs {
    location: String,
    date: String,
}

fn location(what: &str) -> Property {
    Property::string(format!(
        r#"The location to get {} for (e.g., "New York", "London", "Tokyo")"#,
        what
    ))
}

/// Register the weather tools against `service`.
pub fn register_tools(registry: &ToolRegistry, service: Arc<WeatherService>) {
    let svc = Arc::clone(&service);
    registry.register(ToolDescriptor::from_fn(
        "get_current_weather",
        "Get the current weather for a location",
        ParameterSchema::object()
            .property("location", location("weather"))
            .required(["location"]),
        move |params| {
            let svc = Arc::clone(&svc);
            async move {
                let args: CurrentArgs = params.parse()?;
                svc.current(&args.location)
            }
        },
    ));

    let svc = Arc::clone(&service);
    registry.register(ToolDescriptor::from_fn(
        "get_weather_forecast",
        "Get the weather forecast for a location",
        ParameterSchema::object()
            .property("location", location("weather forecast"))
            .property("days", Property::number("Number of days to forecast (max 5)"))
            .required(["location"]),
        move |params| {
            let svc = Arc::clone(&svc);
            async move {
                let args: ForecastArgs = params.parse()?;
                svc.forecast(&args.location, args.days)
            }
        },
    ));

    let svc = service;
    registry.register(ToolDescriptor::from_fn(
        "get_historical_weather",
        "Get historical weather data for a location",
        ParameterSchema::object()
            .property("location", location("historical weather"))
            .property(
                "date",
                Property::string("The date to get historical weather for (YYYY-MM-DD)"),
            )
            .required(["location", "date"]),
        move |params| {
            let svc = Arc::clone(&svc);
            async move {
                let args: HistoricalArgs = params.parse()?;
                svc.historical(&args.location, &args.date)
            }
        },
    ));
}
