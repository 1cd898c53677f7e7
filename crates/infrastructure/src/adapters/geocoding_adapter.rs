//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_geocoding::{GeocodingClient, GeocodingError, NominatimClient, NominatimConfig};
use tracing::{debug, instrument};

/// Adapter for location resolution using the Nominatim API
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: NominatimClient,
}

impl GeocodingAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client =
            NominatimClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_defaults() -> Result<Self, ApplicationError> {
        Self::new(&NominatimConfig::default())
    }

    /// Map integration geocoding error to application error
    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::ConnectionFailed(e) | GeocodingError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            GeocodingError::ParseError(e) => ApplicationError::Internal(e),
            GeocodingError::Timeout => {
                ApplicationError::ExternalService("Geocoding request timed out".to_string())
            },
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn resolve(&self, location: &str) -> Result<Option<GeoLocation>, ApplicationError> {
        let result = self
            .client
            .geocode(location)
            .await
            .map_err(Self::map_error)?;

        match &result {
            Some(coords) => debug!(%coords, "Resolved location"),
            None => debug!(%location, "No match for location"),
        }

        Ok(result)
    }
}
