//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A geographic location with latitude and longitude
///
/// Geocoding resolution is expressed as `Option<GeoLocation>` throughout the
/// workflow: an unresolved location is `None`, never a reserved coordinate
/// pair. A real (0.0, 0.0) is a valid, resolvable location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
pub struct InvalidCoordinates;

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location without validation (for trusted sources)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = GeoLocation::new(51.5074, -0.1278).expect("valid coordinates");
        assert!((loc.latitude() - 51.5074).abs() < f64::EPSILON);
        assert!((loc.longitude() - -0.1278).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        // Null Island is a real place as far as validation is concerned
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        assert!(GeoLocation::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(GeoLocation::new(0.0, 181.0).is_err());
        assert!(GeoLocation::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_display() {
        let loc = GeoLocation::new(52.52, 13.405).expect("valid");
        let display = format!("{loc}");
        assert!(display.contains("52.52"));
        assert!(display.contains("13.405"));
    }

    #[test]
    fn test_serialization() {
        let loc = GeoLocation::new(52.52, 13.405).expect("valid");
        let json = serde_json::to_string(&loc).expect("serialize");
        assert!(json.contains("52.52"));

        let deserialized: GeoLocation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loc, deserialized);
    }
}
