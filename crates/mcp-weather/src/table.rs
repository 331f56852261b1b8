//! Sample weather data keyed by location

use std::collections::HashMap;

use serde::Serialize;

/// Conditions right now
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub temperature: i32,
    pub condition: String,
    pub humidity: u32,
    pub wind_speed: u32,
    pub precipitation: f64,
}

/// One forecast day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastDay {
    pub date: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
}

/// Recorded conditions for a past date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricalDay {
    pub high: i32,
    pub low: i32,
    pub condition: String,
}

/// Everything known about one location
#[derive(Debug, Clone, PartialEq)]
pub struct LocationWeather {
    pub current: CurrentWeather,
    pub forecast: Vec<ForecastDay>,
    pub historical: HashMap<String, HistoricalDay>,
}

impl LocationWeather {
    pub fn historical(&self, date: &str) -> Option<&HistoricalDay> {
        self.historical.get(date)
    }
}

/// Normalize a location name to title case per space-separated word.
///
/// `"new york"` and `"NEW YORK"` both become `"New York"`.
pub fn title_case(location: &str) -> String {
    location
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Lookup table of locations
#[derive(Debug, Clone, Default)]
pub struct WeatherTable {
    locations: HashMap<String, LocationWeather>,
}

impl WeatherTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a location, stored under its title-cased name
    pub fn insert(&mut self, location: &str, weather: LocationWeather) {
        self.locations.insert(title_case(location), weather);
    }

    /// Case-insensitive lookup per word
    pub fn lookup(&self, location: &str) -> Option<&LocationWeather> {
        self.locations.get(&title_case(location))
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Known location names, sorted
    pub fn locations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.locations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// New York, London and Tokyo with a five day forecast and three
    /// historical dates each
    pub fn sample() -> Self {
        let mut table = Self::new();
        table.insert(
            "New York",
            location(
                current(72, "Partly Cloudy", 65, 8, 0.0),
                [
                    ("2023-06-01", 75, 60, "Sunny"),
                    ("2023-06-02", 78, 62, "Partly Cloudy"),
                    ("2023-06-03", 80, 65, "Cloudy"),
                    ("2023-06-04", 82, 68, "Rain"),
                    ("2023-06-05", 79, 64, "Partly Cloudy"),
                ],
                [
                    ("2023-05-01", 68, 52, "Sunny"),
                    ("2023-05-15", 72, 58, "Rain"),
                    ("2023-05-30", 70, 55, "Cloudy"),
                ],
            ),
        );
        table.insert(
            "London",
            location(
                current(65, "Rainy", 80, 12, 0.2),
                [
                    ("2023-06-01", 68, 55, "Cloudy"),
                    ("2023-06-02", 70, 57, "Partly Cloudy"),
                    ("2023-06-03", 72, 58, "Sunny"),
                    ("2023-06-04", 75, 60, "Partly Cloudy"),
                    ("2023-06-05", 73, 59, "Rain"),
                ],
                [
                    ("2023-05-01", 62, 48, "Cloudy"),
                    ("2023-05-15", 65, 50, "Rain"),
                    ("2023-05-30", 67, 52, "Partly Cloudy"),
                ],
            ),
        );
        table.insert(
            "Tokyo",
            location(
                current(80, "Sunny", 70, 5, 0.0),
                [
                    ("2023-06-01", 82, 68, "Sunny"),
                    ("2023-06-02", 85, 70, "Sunny"),
                    ("2023-06-03", 83, 69, "Partly Cloudy"),
                    ("2023-06-04", 80, 67, "Rain"),
                    ("2023-06-05", 78, 65, "Cloudy"),
                ],
                [
                    ("2023-05-01", 75, 60, "Sunny"),
                    ("2023-05-15", 78, 63, "Partly Cloudy"),
                    ("2023-05-30", 80, 65, "Rain"),
                ],
            ),
        );
        table
    }
}

fn current(
    temperature: i32,
    condition: &str,
    humidity: u32,
    wind_speed: u32,
    precipitation: f64,
) -> CurrentWeather {
    CurrentWeather {
        temperature,
        condition: condition.to_string(),
        humidity,
        wind_speed,
        precipitation,
    }
}

fn location<const F: usize, const H: usize>(
    current: CurrentWeather,
    forecast: [(&str, i32, i32, &str); F],
    historical: [(&str, i32, i32, &str); H],
) -> LocationWeather {
    LocationWeather {
        current,
        forecast: forecast
            .into_iter()
            .map(|(date, high, low, condition)| ForecastDay {
                date: date.to_string(),
                high,
                low,
                condition: condition.to_string(),
            })
            .collect(),
        historical: historical
            .into_iter()
            .map(|(date, high, low, condition)| {
                (
                    date.to_string(),
                    HistoricalDay {
                        high,
                        low,
                        condition: condition.to_string(),
                    },
                )
            })
            .collect(),
    }
}
