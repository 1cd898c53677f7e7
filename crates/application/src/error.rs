//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = ApplicationError::ExternalService("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));

        let err = ApplicationError::Inference("model not loaded".to_string());
        assert!(err.to_string().contains("model not loaded"));
    }
}
