//! Ollama-compatible inference engine implementation
//!
//! Connects to any server exposing the Ollama chat API.

mod client;

pub use client::OllamaInferenceEngine;
