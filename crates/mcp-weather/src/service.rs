//! Weather queries over a [`WeatherTable`]

use chrono::{SecondsFormat, Utc};
use mcp_registry::{ToolError, ToolResult};
use serde_json::json;

use crate::table::{LocationWeather, WeatherTable};

/// Most forecast days ever returned
pub const MAX_FORECAST_DAYS: usize = 5;

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Answers weather tool calls from a lookup table
#[derive(Debug, Clone)]
pub struct WeatherService {
    table: WeatherTable,
}

impl WeatherService {
    pub fn new(table: WeatherTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &WeatherTable {
        &self.table
    }

    fn find(&self, location: &str) -> Result<&LocationWeather, ToolError> {
        self.table.lookup(location).ok_or_else(|| {
            tracing::debug!(location, "Unknown location");
            ToolError::handler(format!("Weather data not available for {}", location))
        })
    }

    /// Current conditions; `location` is echoed as given
    pub fn current(&self, location: &str) -> ToolResult {
        let weather = self.find(location)?;
        Ok(json!({
            "success": true,
            "location": location,
            "weather": weather.current,
            "timestamp": now(),
        }))
    }

    /// Forecast for up to [`MAX_FORECAST_DAYS`] days; `None` or zero means all
    pub fn forecast(&self, location: &str, days: Option<u32>) -> ToolResult {
        let weather = self.find(location)?;
        let days = match days {
            None | Some(0) => MAX_FORECAST_DAYS,
            Some(n) => (n as usize).min(MAX_FORECAST_DAYS),
        };
        let forecast = &weather.forecast[..days.min(weather.forecast.len())];
        Ok(json!({
            "success": true,
            "location": location,
            "forecast": forecast,
            "timestamp": now(),
        }))
    }

    /// Recorded conditions for `date` (`YYYY-MM-DD`, matched exactly)
    pub fn historical(&self, location: &str, date: &str) -> ToolResult {
        let weather = self.find(location)?;
        let day = weather.historical(date).ok_or_else(|| {
            ToolError::handler(format!(
                "Historical weather data not available for {} on {}",
                location, date
            ))
        })?;
        Ok(json!({
            "success": true,
            "location": location,
            "date": date,
            "weather": day,
        }))
    }
}

impl Default for WeatherService {
    fn default() -> Self {
        Self::new(WeatherTable::sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(None, 5)]
    #[case(Some(0), 5)]
    #[case(Some(1), 1)]
    #[case(Some(3), 3)]
    #[case(Some(5), 5)]
    #[case(Some(10), 5)]
    fn forecast_day_count(#[case] days: Option<u32>, #[case] expected: usize) {
        let out = WeatherService::default().forecast("Tokyo", days).unwrap();
        assert_eq!(out["forecast"].as_array().unwrap().len(), expected);
    }

    #[test]
    fn forecast_starts_at_first_day() {
        let out = WeatherService::default()
            .forecast("new york", Some(2))
            .unwrap();
        assert_eq!(
            out["forecast"],
            json!([
                { "date": "2023-06-01", "high": 75, "low": 60, "condition": "Sunny" },
                { "date": "2023-06-02", "high": 78, "low": 62, "condition": "Partly Cloudy" },
            ])
        );
        assert_eq!(out["location"], "new york");
    }

    #[test]
    fn current_has_timestamp() {
        let out = WeatherService::default().current("London").unwrap();
        assert_eq!(out["weather"]["windSpeed"], 12);
        let timestamp = out["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert!(timestamp.ends_with('Z'));
    }

    #[test]
    fn unknown_location() {
        let err = WeatherService::default().current("Atlantis").unwrap_err();
        assert_eq!(
            err,
            ToolError::Handler("Weather data not available for Atlantis".into())
        );
    }

    #[test]
    fn unknown_date() {
        let err = WeatherService::default()
            .historical("Tokyo", "2023-05-02")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Historical weather data not available for Tokyo on 2023-05-02"
        );
    }
}
