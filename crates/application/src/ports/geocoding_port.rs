//! Geocoding port
//!
//! Defines the interface for resolving free-form location strings to
//! geographic coordinates.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a location string to coordinates
    ///
    /// Returns `Ok(None)` when the service has no match for the location;
    /// `Err` is reserved for transport or parse failures.
    async fn resolve(&self, location: &str) -> Result<Option<GeoLocation>, ApplicationError>;
}
