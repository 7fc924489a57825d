// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business rules (placeholder filtering, first-comment drop, rounding) live in
// domain activities that call through these traits.
//
// Naming convention: Base* for trait names (e.g., BaseCommentSource, BaseSentimentModel)

use async_trait::async_trait;

use crate::domains::comments::{RetrievalError, ThreadEntry};
use crate::domains::sentiment::{ScoringUnavailable, SentimentResult};

// =============================================================================
// Comment Source Trait (Infrastructure - social media content provider)
// =============================================================================

#[async_trait]
pub trait BaseCommentSource: Send + Sync {
    /// Resolve a locator to its post and return the top-level thread entries
    /// in provider order, placeholders included.
    async fn top_level_entries(&self, locator: &str) -> Result<Vec<ThreadEntry>, RetrievalError>;
}

// =============================================================================
// Sentiment Model Trait (Infrastructure - text classification provider)
// =============================================================================

#[async_trait]
pub trait BaseSentimentModel: Send + Sync {
    /// Identifier of the underlying model (for logs and health output)
    fn model_id(&self) -> &str;

    /// Longest input, in chars, the model accepts without failing.
    /// `None` means the model truncates on its own.
    fn max_input_chars(&self) -> Option<usize> {
        None
    }

    /// Classify a batch of texts. Must return exactly one result per input,
    /// in input order. Scores are raw (unrounded) probabilities.
    async fn classify(&self, texts: &[String]) -> Result<Vec<SentimentResult>, ScoringUnavailable>;

    /// Verify the model can be used. Called once at startup.
    async fn warm_up(&self) -> Result<(), ScoringUnavailable> {
        self.classify(&["warm up".to_string()]).await.map(|_| ())
    }
}
