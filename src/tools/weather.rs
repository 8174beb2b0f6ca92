//! Weather lookup tool
//!
//! Fetches current conditions from the Open-Meteo geocoding and forecast
//! APIs and reshapes them into a compact report. This is the one tool that
//! talks to something other than the phone.

use crate::error::{Result, TaskerError};
use crate::tools::ToolContext;
use serde::{Deserialize, Serialize};
use tracing::debug;

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Compact weather report returned to the caller
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    /// Resolved location name
    pub location: String,

    /// Country of the resolved location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Current temperature in degrees Celsius
    pub temperature_c: f64,

    /// Current wind speed in km/h
    pub wind_speed_kmh: f64,

    /// Human-readable condition description
    pub condition: String,

    /// When the report was retrieved
    pub retrieved_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i64,
}

/// Look up current weather for a location
pub async fn get_weather(context: ToolContext, location: String) -> Result<WeatherReport> {
    if location.trim().is_empty() {
        return Err(TaskerError::invalid_input("Location cannot be empty"));
    }

    let client = reqwest::Client::builder()
        .timeout(context.config.phone.timeout)
        .build()?;

    debug!("Geocoding '{location}'");
    let geocoding: GeocodingResponse = client
        .get(GEOCODING_URL)
        .query(&[("name", location.as_str()), ("count", "1")])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let place = geocoding
        .results
        .and_then(|mut results| results.pop())
        .ok_or_else(|| TaskerError::invalid_input(format!("Unknown location: {location}")))?;

    debug!(
        "Fetching forecast for {} ({}, {})",
        place.name, place.latitude, place.longitude
    );
    let forecast: ForecastResponse = client
        .get(FORECAST_URL)
        .query(&[
            ("latitude", place.latitude.to_string()),
            ("longitude", place.longitude.to_string()),
            ("current_weather", "true".to_string()),
        ])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(reshape(place, forecast.current_weather))
}

fn reshape(place: GeocodingResult, current: CurrentWeather) -> WeatherReport {
    WeatherReport {
        location: place.name,
        country: place.country,
        temperature_c: current.temperature,
        wind_speed_kmh: current.windspeed,
        condition: describe_weather_code(current.weathercode).to_string(),
        retrieved_at: chrono::Utc::now(),
    }
}

/// Map a WMO weather code to a description
fn describe_weather_code(code: i64) -> &'static str {
    match code {
        0 => "clear sky",
        1 | 2 => "partly cloudy",
        3 => "overcast",
        45 | 48 => "fog",
        51 | 53 | 55 => "drizzle",
        56 | 57 => "freezing drizzle",
        61 | 63 | 65 => "rain",
        66 | 67 => "freezing rain",
        71 | 73 | 75 | 77 => "snow",
        80 | 81 | 82 => "rain showers",
        85 | 86 => "snow showers",
        95 => "thunderstorm",
        96 | 99 => "thunderstorm with hail",
        _ => "unknown conditions",
    }
}
