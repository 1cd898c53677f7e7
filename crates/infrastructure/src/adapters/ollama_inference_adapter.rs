//! Ollama inference adapter - Implements InferencePort using ai_core
//!
//! Works with any server exposing the Ollama chat API.

use std::time::Instant;

use ai_core::{InferenceConfig, InferenceEngine, InferenceRequest, OllamaInferenceEngine};
use application::error::ApplicationError;
use application::ports::{InferencePort, InferenceResult};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for Ollama-compatible inference servers
#[derive(Debug)]
pub struct OllamaInferenceAdapter {
    engine: OllamaInferenceEngine,
}

impl OllamaInferenceAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let engine = OllamaInferenceEngine::new(config)
            .map_err(|e| ApplicationError::Inference(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Create with the structured-output configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_defaults() -> Result<Self, ApplicationError> {
        Self::new(InferenceConfig::structured_output())
    }

    /// Convert ai_core error to application error
    fn map_error(e: ai_core::InferenceError) -> ApplicationError {
        match e {
            ai_core::InferenceError::ConnectionFailed(msg) => {
                ApplicationError::ExternalService(format!("Ollama connection failed: {msg}"))
            },
            ai_core::InferenceError::Timeout(ms) => {
                ApplicationError::ExternalService(format!("Inference timeout after {ms}ms"))
            },
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl InferencePort for OllamaInferenceAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError> {
        let started = Instant::now();

        let response = self
            .engine
            .generate(InferenceRequest::simple(prompt))
            .await
            .map_err(Self::map_error)?;

        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        debug!(model = %response.model, latency_ms, "Generation completed");

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            latency_ms,
        })
    }

    async fn is_healthy(&self) -> bool {
        self.engine.health_check().await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_defaults_creates_adapter() {
        assert!(OllamaInferenceAdapter::with_defaults().is_ok());
    }

    #[test]
    fn map_error_connection() {
        let err = ai_core::InferenceError::ConnectionFailed("refused".to_string());
        assert!(matches!(
            OllamaInferenceAdapter::map_error(err),
            ApplicationError::ExternalService(_)
        ));
    }

    #[test]
    fn map_error_timeout() {
        let err = ai_core::InferenceError::Timeout(5000);
        let mapped = OllamaInferenceAdapter::map_error(err);
        assert!(mapped.to_string().contains("5000ms"));
    }

    #[test]
    fn map_error_server() {
        let err = ai_core::InferenceError::ServerError("boom".to_string());
        assert!(matches!(
            OllamaInferenceAdapter::map_error(err),
            ApplicationError::Inference(_)
        ));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OllamaInferenceAdapter>();
    }
}
