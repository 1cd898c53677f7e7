//! AI Core - Inference engine abstraction
//!
//! Provides the inference trait and an implementation for any server
//! exposing the Ollama chat API.

pub mod config;
pub mod error;
pub mod ollama;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use ollama::OllamaInferenceEngine;
pub use ports::{InferenceEngine, InferenceRequest, InferenceResponse, TokenUsage};
