//! Inference port - Interface for LLM text generation

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of an inference call
#[derive(Debug, Clone)]
pub struct InferenceResult {
    /// Generated response content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Latency in milliseconds
    pub latency_ms: u64,
}

/// Port for inference operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Generate a response for a single prompt
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError>;

    /// Check if the inference backend is healthy
    async fn is_healthy(&self) -> bool;
}
