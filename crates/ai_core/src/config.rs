//! Configuration for inference engine

use serde::{Deserialize, Serialize};

/// Configuration for the inference engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the Ollama-compatible inference server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default model to use
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Temperature for sampling (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Top-p (nucleus) sampling
    #[serde(default = "default_top_p")]
    pub top_p: f32,
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "qwen2.5-1.5b-instruct".to_string()
}

const fn default_timeout_ms() -> u64 {
    60000 // 60 seconds
}

const fn default_max_tokens() -> u32 {
    1024
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_top_p() -> f32 {
    0.9
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
            timeout_ms: default_timeout_ms(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
        }
    }
}

impl InferenceConfig {
    /// Config tuned for schema-constrained output
    ///
    /// Lower temperature makes the model stick to the requested JSON shape
    /// more reliably.
    #[must_use]
    pub fn structured_output() -> Self {
        Self {
            temperature: 0.2,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = InferenceConfig::default();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.default_model, "qwen2.5-1.5b-instruct");
        assert_eq!(config.timeout_ms, 60000);
        assert_eq!(config.max_tokens, 1024);
        assert!((config.temperature - 0.7).abs() < 0.01);
        assert!((config.top_p - 0.9).abs() < 0.01);
    }

    #[test]
    fn structured_output_lowers_temperature() {
        let config = InferenceConfig::structured_output();
        assert!((config.temperature - 0.2).abs() < 0.01);
        assert_eq!(config.default_model, InferenceConfig::default().default_model);
    }

    #[test]
    fn config_deserialization_with_defaults() {
        let json = r#"{"base_url":"http://custom:8080"}"#;
        let config: InferenceConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.base_url, "http://custom:8080");
        assert_eq!(config.timeout_ms, 60000);
    }

    #[test]
    fn config_serialization() {
        let config = InferenceConfig::default();
        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains("base_url"));
        assert!(json.contains("default_model"));
    }
}
