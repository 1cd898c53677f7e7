//! Application configuration

use ai_core::InferenceConfig;
use integration_geocoding::NominatimConfig;
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Inference configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Weather service configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Geocoding service configuration
    #[serde(default)]
    pub geocoding: NominatimConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// Precedence, lowest to highest: struct defaults, `config.toml` (or the
    /// given file), `SKYCAST_*` environment variables.
    pub fn load(file: Option<&str>) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(file.unwrap_or("config")).required(file.is_some()))
            .add_source(
                config::Environment::with_prefix("SKYCAST")
                    .separator("__")
                    .try_parsing(true),
            );

        let loaded: Self = builder.build()?.try_deserialize()?;
        Ok(loaded)
    }
}
