//! Error types for the Reddit client.

use thiserror::Error;

/// Result type for Reddit client operations.
pub type Result<T> = std::result::Result<T, RedditError>;

/// Reddit client errors.
#[derive(Debug, Error)]
pub enum RedditError {
    /// Missing or unusable client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The URL does not point at a Reddit submission
    #[error("Invalid submission URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport failure (DNS, connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credentials rejected or access to the submission forbidden
    #[error("Authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    /// Submission does not exist or was removed
    #[error("Submission not found: {post_id}")]
    NotFound { post_id: String },

    /// Any other non-2xx response
    #[error("Reddit API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not have the expected listing shape
    #[error("Parse error: {0}")]
    Parse(String),
}
