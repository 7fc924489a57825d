//! Error types for the Hugging Face client.

use thiserror::Error;

/// Result type for Hugging Face client operations.
pub type Result<T> = std::result::Result<T, HuggingFaceError>;

/// Hugging Face client errors.
#[derive(Debug, Error)]
pub enum HuggingFaceError {
    /// Configuration error (missing token, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Model id unknown to the hub or the inference provider
    #[error("Model not found: {model}")]
    ModelNotFound { model: String },

    /// Model exists but is still being loaded by the provider
    #[error("Model {model} is loading (estimated {estimated_time:?}s)")]
    ModelLoading {
        model: String,
        estimated_time: Option<f64>,
    },

    /// API error (non-2xx response, rate limit, invalid request)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}
