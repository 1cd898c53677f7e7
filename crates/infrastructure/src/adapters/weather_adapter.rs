//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::value_objects::{GeoLocation, WeatherObservation};
use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for weather lookups using the Open-Meteo API
#[derive(Debug)]
pub struct WeatherAdapter {
    client: OpenMeteoClient,
}

impl WeatherAdapter {
    /// Create a new adapter with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_defaults() -> Result<Self, ApplicationError> {
        Self::new(WeatherConfig::default())
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e) | WeatherError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            WeatherError::InvalidCoordinates => {
                ApplicationError::Internal("Invalid coordinates".to_string())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn current_weather(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherObservation, ApplicationError> {
        let result = self
            .client
            .get_current(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(obs) => {
                debug!(temperature = obs.temperature, "Retrieved current weather");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
