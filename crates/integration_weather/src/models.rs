//! Open-Meteo API response models

use serde::Deserialize;

/// Top-level Open-Meteo forecast response
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub latitude: f64,
    pub longitude: f64,
    /// Present when the request asked for `current_weather=true`
    pub current_weather: Option<CurrentWeatherData>,
}

/// The `current_weather` block of the response
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherData {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    pub windspeed: f64,
    /// Observation timestamp (ISO 8601, local to the requested timezone)
    pub time: String,
}
