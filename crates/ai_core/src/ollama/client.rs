//! Ollama chat client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{InferenceEngine, InferenceRequest, InferenceResponse, TokenUsage};

/// Inference engine backed by an Ollama-compatible chat endpoint
#[derive(Debug)]
pub struct OllamaInferenceEngine {
    client: Client,
    config: InferenceConfig,
}

impl OllamaInferenceEngine {
    /// Create a new inference engine
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            "Initialized Ollama inference engine"
        );

        Ok(Self { client, config })
    }

    /// Create with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, InferenceError> {
        Self::new(InferenceConfig::default())
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/api/{}",
            self.config.base_url,
            endpoint.trim_start_matches('/')
        )
    }

    /// Get the model to use for a request
    fn resolve_model<'a>(&'a self, request: &'a InferenceRequest) -> &'a str {
        request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model)
    }
}

/// Ollama-format chat request
#[derive(Debug, Serialize)]
struct OllamaChatRequest {
    model: String,
    messages: Vec<OllamaMessage>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

#[derive(Debug, Serialize)]
struct OllamaMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

/// Ollama-format chat response
#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    model: String,
    message: OllamaResponseMessage,
    done: bool,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

#[async_trait]
impl InferenceEngine for OllamaInferenceEngine {
    #[instrument(skip(self, request), fields(model = %self.resolve_model(&request)))]
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError> {
        let model = self.resolve_model(&request).to_string();

        let ollama_request = OllamaChatRequest {
            model,
            messages: request
                .messages
                .iter()
                .map(|m| OllamaMessage {
                    role: m.role.clone(),
                    content: m.content.clone(),
                })
                .collect(),
            stream: false,
            options: Some(OllamaOptions {
                temperature: request.temperature.or(Some(self.config.temperature)),
                num_predict: request.max_tokens.or(Some(self.config.max_tokens)),
                top_p: Some(self.config.top_p),
            }),
        };

        debug!("Sending chat request");

        let response = self
            .client
            .post(self.api_url("chat"))
            .json(&ollama_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Inference request failed");
            return Err(InferenceError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let ollama_response: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let usage = match (
            ollama_response.prompt_eval_count,
            ollama_response.eval_count,
        ) {
            (Some(prompt), Some(completion)) => Some(TokenUsage {
                prompt_tokens: prompt,
                completion_tokens: completion,
                total_tokens: prompt + completion,
            }),
            _ => None,
        };

        debug!(tokens = ?usage, "Inference completed");

        Ok(InferenceResponse {
            content: ollama_response.message.content,
            model: ollama_response.model,
            usage,
            finish_reason: if ollama_response.done {
                Some("stop".to_string())
            } else {
                None
            },
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, InferenceError> {
        let response = self.client.get(self.api_url("tags")).send().await?;
        Ok(response.status().is_success())
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }
}
