use std::fmt;

use reqwest::StatusCode;
use tracing::{debug, error, info};

use crate::error::AppError;

mod response;

const WEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Current temperature reported for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSample {
    /// City name as resolved by the provider, not as typed by the user
    pub location: String,
    pub temperature_celsius: f64,
}

impl From<response::WeatherResponse> for WeatherSample {
    fn from(response: response::WeatherResponse) -> Self {
        Self {
            location: response.name,
            temperature_celsius: response.main.temp,
        }
    }
}

impl fmt::Display for WeatherSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current temperature in {}: {:.1}°C",
            self.location, self.temperature_celsius
        )
    }
}

/// Fetches the current temperature for `city` from OpenWeatherMap in metric units.
///
/// # Arguments
/// * `api_key` - OpenWeatherMap API key
/// * `city` - Free-text city name, passed to the API as is (e.g., "New York")
pub async fn fetch_temperature(api_key: &str, city: &str) -> Result<WeatherSample, AppError> {
    fetch_temperature_from(WEATHER_ENDPOINT, api_key, city).await
}

/// Same as [`fetch_temperature`] but against an arbitrary endpoint.
pub async fn fetch_temperature_from(
    endpoint: &str,
    api_key: &str,
    city: &str,
) -> Result<WeatherSample, AppError> {
    info!("Fetching weather data for location: {}", city);
    let url = format!("{}?q={}&appid={}&units=metric", endpoint, city, api_key);
    let client = reqwest::Client::new();
    let response = client.get(&url).send().await.map_err(AppError::Transport)?;

    let status = response.status();
    if status != StatusCode::OK {
        // the body is only diagnostic here
        let body = response.text().await.unwrap_or_else(|e| {
            debug!("Failed to read error body: {}", e);
            String::new()
        });
        error!("Failed to fetch weather data: {}", status);
        return Err(AppError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.bytes().await.map_err(AppError::Io)?;
    let weather_response: response::WeatherResponse = serde_json::from_slice(&body)?;
    debug!("Weather data fetched successfully: {:?}", weather_response);
    Ok(weather_response.into())
}
