//! Port definitions - Interfaces the workflow depends on
//!
//! Adapters in the infrastructure layer implement these against the
//! concrete external services.

mod geocoding_port;
mod inference_port;
mod weather_port;

pub use geocoding_port::GeocodingPort;
pub use inference_port::{InferencePort, InferenceResult};
pub use weather_port::WeatherPort;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use inference_port::MockInferencePort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
