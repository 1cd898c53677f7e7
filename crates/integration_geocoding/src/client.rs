//! Nominatim geocoding client
//!
//! Converts free-form location strings to geographic coordinates using
//! the [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).
//!
//! Implements rate limiting (max 1 request/second per Nominatim usage
//! policy). Results are not cached; every lookup is live.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Country code filter (e.g., "de"); empty for worldwide search
    #[serde(default)]
    pub country_filter: String,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            country_filter: String::new(),
        }
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a location to coordinates; `Ok(None)` when there is no match
    async fn geocode(&self, location: &str) -> Result<Option<GeoLocation>, GeocodingError>;
}

/// Nominatim-based geocoding client with rate limiting
#[derive(Debug)]
pub struct NominatimClient {
    client: Client,
    config: NominatimConfig,
    last_request: Arc<Mutex<Instant>>,
}

impl NominatimClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Skycast/0.2 (https://github.com/skycast/skycast)")
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            last_request: Arc::new(Mutex::new(
                Instant::now()
                    .checked_sub(Duration::from_secs(2))
                    .unwrap_or_else(Instant::now),
            )),
        })
    }

    /// Enforce Nominatim's rate limit (max 1 request per second)
    async fn rate_limit(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();
        if elapsed < Duration::from_millis(1100) {
            let wait = Duration::from_millis(1100).saturating_sub(elapsed);
            debug!(?wait, "Rate limiting geocoding request");
            tokio::time::sleep(wait).await;
        }
        *last = Instant::now();
    }
}

#[async_trait]
impl GeocodingClient for NominatimClient {
    #[instrument(skip(self))]
    async fn geocode(&self, location: &str) -> Result<Option<GeoLocation>, GeocodingError> {
        let location = location.trim();
        if location.is_empty() {
            return Ok(None);
        }

        self.rate_limit().await;

        let url = format!("{}/search", self.config.base_url);
        let mut params = vec![
            ("q", location.to_string()),
            ("format", "jsonv2".to_string()),
            ("limit", "1".to_string()),
        ];

        if !self.config.country_filter.is_empty() {
            params.push(("countrycodes", self.config.country_filter.clone()));
        }

        debug!(%location, "Geocoding location");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let Some(result) = results.first() else {
            debug!(%location, "No geocoding match");
            return Ok(None);
        };

        let lat: f64 = result
            .lat
            .parse()
            .map_err(|_| GeocodingError::ParseError("Invalid latitude".to_string()))?;
        let lon: f64 = result
            .lon
            .parse()
            .map_err(|_| GeocodingError::ParseError("Invalid longitude".to_string()))?;

        debug!(%location, %lat, %lon, "Geocoded location");

        GeoLocation::new(lat, lon)
            .map(Some)
            .map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}

/// Raw Nominatim API response
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default() {
        let config = NominatimConfig::default();
        assert_eq!(config.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.country_filter.is_empty());
    }

    #[test]
    fn error_display() {
        let err = GeocodingError::RequestFailed("HTTP 503".to_string());
        assert!(err.to_string().contains("HTTP 503"));

        let err = GeocodingError::Timeout;
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn nominatim_result_parsing() {
        let json = r#"[{"lat": "51.5074", "lon": "-0.1278", "display_name": "London"}]"#;
        let results: Vec<NominatimResult> = serde_json::from_str(json).expect("valid");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].lat, "51.5074");
        assert_eq!(results[0].lon, "-0.1278");
    }

    #[test]
    fn nominatim_empty_result() {
        let json = r"[]";
        let results: Vec<NominatimResult> = serde_json::from_str(json).expect("valid");
        assert!(results.is_empty());
    }

    #[test]
    fn config_serialization() {
        let config = NominatimConfig::default();
        let json = serde_json::to_string(&config).expect("serialize");
        let deserialized: NominatimConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(deserialized.base_url, config.base_url);
    }
}
