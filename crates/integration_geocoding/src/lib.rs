//! Nominatim geocoding integration
//!
//! Resolves free-form location strings to coordinates via the
//! [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).

mod client;

pub use client::{GeocodingClient, GeocodingError, NominatimClient, NominatimConfig};
