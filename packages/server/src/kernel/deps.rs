//! Server dependencies for the analysis pipeline (using traits for testability)
//!
//! This module provides the dependency container passed into domain
//! activities, plus the adapters that put the Reddit and Hugging Face clients
//! behind the kernel traits.

use async_trait::async_trait;
use huggingface_client::{top_label, HuggingFaceClient, HuggingFaceError};
use reddit_client::{RedditClient, RedditError, Thing};
use std::sync::Arc;

use crate::domains::comments::{RetrievalError, ThreadEntry};
use crate::domains::sentiment::{ScoringUnavailable, SentimentResult};
use crate::kernel::{BaseCommentSource, BaseSentimentModel};

// =============================================================================
// RedditClient Adapter (implements BaseCommentSource trait)
// =============================================================================

/// Wrapper around RedditClient that implements BaseCommentSource trait
pub struct RedditAdapter(pub Arc<RedditClient>);

impl RedditAdapter {
    pub fn new(client: Arc<RedditClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseCommentSource for RedditAdapter {
    async fn top_level_entries(&self, locator: &str) -> Result<Vec<ThreadEntry>, RetrievalError> {
        let thread = self
            .0
            .submission_comments_by_url(locator)
            .await
            .map_err(|e| retrieval_error(locator, e))?;

        Ok(thread
            .comments
            .into_iter()
            .filter_map(|thing| match thing {
                Thing::Comment(comment) => Some(ThreadEntry::Comment(comment.body)),
                Thing::More(_) => Some(ThreadEntry::Placeholder),
                Thing::Link(_) | Thing::Other(_) => None,
            })
            .collect())
    }
}

fn retrieval_error(locator: &str, error: RedditError) -> RetrievalError {
    match error {
        RedditError::InvalidUrl { reason, .. } => RetrievalError::InvalidLocator {
            locator: locator.to_string(),
            reason,
        },
        RedditError::NotFound { .. } => RetrievalError::NotFound {
            locator: locator.to_string(),
        },
        RedditError::Auth { .. } | RedditError::Config(_) => {
            RetrievalError::Unauthorized(error.to_string())
        }
        RedditError::Http(_) => RetrievalError::Unreachable(error.to_string()),
        RedditError::Api { .. } | RedditError::Parse(_) => {
            RetrievalError::Provider(error.to_string())
        }
    }
}

// =============================================================================
// HuggingFaceClient Adapter (implements BaseSentimentModel trait)
// =============================================================================

/// Hosted text-classification model behind BaseSentimentModel
pub struct HuggingFaceSentimentModel {
    client: Arc<HuggingFaceClient>,
    model: String,
    max_input_chars: usize,
}

impl HuggingFaceSentimentModel {
    pub fn new(client: Arc<HuggingFaceClient>, model: impl Into<String>, max_input_chars: usize) -> Self {
        Self {
            client,
            model: model.into(),
            max_input_chars,
        }
    }
}

#[async_trait]
impl BaseSentimentModel for HuggingFaceSentimentModel {
    fn model_id(&self) -> &str {
        &self.model
    }

    fn max_input_chars(&self) -> Option<usize> {
        Some(self.max_input_chars)
    }

    async fn classify(&self, texts: &[String]) -> Result<Vec<SentimentResult>, ScoringUnavailable> {
        let classifications = self
            .client
            .text_classification(&self.model, texts)
            .await
            .map_err(|e| scoring_unavailable(&self.model, e))?;

        classifications
            .iter()
            .map(|candidates| {
                top_label(candidates)
                    .map(|best| SentimentResult::new(best.label.clone(), best.score))
                    .ok_or_else(|| {
                        ScoringUnavailable::new(format!("model {} returned no labels", self.model))
                    })
            })
            .collect()
    }

    async fn warm_up(&self) -> Result<(), ScoringUnavailable> {
        let info = self
            .client
            .model_info(&self.model)
            .await
            .map_err(|e| scoring_unavailable(&self.model, e))?;

        match info.pipeline_tag.as_deref() {
            Some("text-classification") | None => {}
            Some(other) => {
                return Err(ScoringUnavailable::new(format!(
                    "model {} is a {} model, not text-classification",
                    self.model, other
                )))
            }
        }

        self.classify(&["warm up".to_string()]).await.map(|_| ())
    }
}

fn scoring_unavailable(model: &str, error: HuggingFaceError) -> ScoringUnavailable {
    ScoringUnavailable::new(format!("{}: {}", model, error))
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to domain activities (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub comment_source: Arc<dyn BaseCommentSource>,
    pub sentiment_model: Arc<dyn BaseSentimentModel>,
    /// Number of comments sent to the model per request
    pub sentiment_batch_size: usize,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        comment_source: Arc<dyn BaseCommentSource>,
        sentiment_model: Arc<dyn BaseSentimentModel>,
        sentiment_batch_size: usize,
    ) -> Self {
        Self {
            comment_source,
            sentiment_model,
            sentiment_batch_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reddit_errors_map_to_retrieval_errors() {
        let locator = "https://redd.it/abc";

        assert!(matches!(
            retrieval_error(locator, RedditError::NotFound { post_id: "abc".into() }),
            RetrievalError::NotFound { locator: l } if l == locator
        ));
        assert!(matches!(
            retrieval_error(
                locator,
                RedditError::InvalidUrl { url: locator.into(), reason: "bad".into() }
            ),
            RetrievalError::InvalidLocator { reason, .. } if reason == "bad"
        ));
        assert!(matches!(
            retrieval_error(locator, RedditError::Auth { status: 401, message: String::new() }),
            RetrievalError::Unauthorized(_)
        ));
        assert!(matches!(
            retrieval_error(locator, RedditError::Api { status: 500, message: String::new() }),
            RetrievalError::Provider(_)
        ));
    }

    #[test]
    fn huggingface_errors_name_the_model() {
        let err = scoring_unavailable(
            "some/model",
            HuggingFaceError::ModelNotFound { model: "some/model".into() },
        );
        assert!(err.reason.starts_with("some/model: "));
    }
}
