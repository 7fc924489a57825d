use thiserror::Error;

/// One top-level entry of a comment thread as reported by the content provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadEntry {
    /// A real comment with its raw body.
    Comment(String),
    /// A "load more comments" marker with no content of its own.
    Placeholder,
}

impl ThreadEntry {
    pub fn comment(body: impl Into<String>) -> Self {
        Self::Comment(body.into())
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// Failure to retrieve the comments of a post.
#[derive(Debug, Clone, Error)]
pub enum RetrievalError {
    /// The locator cannot identify a post
    #[error("invalid post locator {locator:?}: {reason}")]
    InvalidLocator { locator: String, reason: String },

    /// The post does not exist or was deleted
    #[error("post not found: {locator}")]
    NotFound { locator: String },

    /// Provider rejected our credentials or access to the post
    #[error("content provider refused access: {0}")]
    Unauthorized(String),

    /// Provider could not be reached
    #[error("content provider unreachable: {0}")]
    Unreachable(String),

    /// Provider answered with an error or an unreadable payload
    #[error("content provider error: {0}")]
    Provider(String),
}
