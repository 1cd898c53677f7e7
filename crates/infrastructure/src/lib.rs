//! Infrastructure layer - Adapters and configuration
//!
//! Implements the application ports against the concrete integrations and
//! provides application-wide configuration loading.

pub mod adapters;
pub mod config;

pub use adapters::{GeocodingAdapter, OllamaInferenceAdapter, WeatherAdapter};
pub use config::AppConfig;
