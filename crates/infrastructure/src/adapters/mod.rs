//! Port adapters over the external integrations

mod geocoding_adapter;
mod ollama_inference_adapter;
mod weather_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use ollama_inference_adapter::OllamaInferenceAdapter;
pub use weather_adapter::WeatherAdapter;
