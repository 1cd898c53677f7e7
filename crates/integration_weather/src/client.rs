//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo Weather API.

use async_trait::async_trait;
use domain::value_objects::WeatherObservation;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::ApiResponse;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get the current weather observation for a coordinate pair
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherObservation, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the API URL for a current-weather request
    fn build_current_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast?latitude={latitude}&longitude={longitude}&current_weather=true&timezone=auto",
            self.config.base_url
        )
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherObservation, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_current_url(latitude, longitude);
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let current = api_response.current_weather.ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })?;

        debug!(
            temperature = current.temperature,
            windspeed = current.windspeed,
            "Retrieved current weather"
        );

        Ok(WeatherObservation {
            temperature: current.temperature,
            windspeed: current.windspeed,
        })
    }

    async fn is_healthy(&self) -> bool {
        // Simple health check using Berlin coordinates
        self.get_current(52.52, 13.41).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_validate_coordinates_valid() {
        assert!(OpenMeteoClient::validate_coordinates(0.0, 0.0).is_ok());
        assert!(OpenMeteoClient::validate_coordinates(90.0, 180.0).is_ok());
        assert!(OpenMeteoClient::validate_coordinates(-90.0, -180.0).is_ok());
        assert!(OpenMeteoClient::validate_coordinates(51.5, -0.12).is_ok());
    }

    #[test]
    fn test_validate_coordinates_invalid() {
        assert!(OpenMeteoClient::validate_coordinates(91.0, 0.0).is_err());
        assert!(OpenMeteoClient::validate_coordinates(-91.0, 0.0).is_err());
        assert!(OpenMeteoClient::validate_coordinates(0.0, 181.0).is_err());
        assert!(OpenMeteoClient::validate_coordinates(0.0, -181.0).is_err());
    }

    #[test]
    fn test_build_current_url() {
        let client =
            OpenMeteoClient::with_defaults().expect("client creation should succeed");
        let url = client.build_current_url(51.5, -0.12);
        assert!(url.contains("latitude=51.5"));
        assert!(url.contains("longitude=-0.12"));
        assert!(url.contains("current_weather=true"));
        assert!(url.contains("timezone=auto"));
    }

    #[test]
    fn test_weather_error_display() {
        let err = WeatherError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));

        let err = WeatherError::RateLimitExceeded;
        assert!(err.to_string().contains("Rate limit"));
    }

    #[test]
    fn test_client_creation() {
        assert!(OpenMeteoClient::with_defaults().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = WeatherConfig {
            base_url: "https://custom.api.com".to_string(),
            timeout_secs: 60,
        };

        let json = serde_json::to_string(&config).expect("should serialize");
        let deserialized: WeatherConfig =
            serde_json::from_str(&json).expect("should deserialize");

        assert_eq!(deserialized.base_url, "https://custom.api.com");
        assert_eq!(deserialized.timeout_secs, 60);
    }
}
