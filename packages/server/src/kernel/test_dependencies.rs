// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseCommentSource, BaseSentimentModel, ServerDeps};
use crate::domains::comments::{RetrievalError, ThreadEntry};
use crate::domains::sentiment::{ScoringUnavailable, SentimentResult};

// =============================================================================
// Mock Comment Source
// =============================================================================

/// Serves canned threads by locator. Unknown locators are `NotFound`.
#[derive(Default)]
pub struct MockCommentSource {
    threads: Mutex<HashMap<String, Result<Vec<ThreadEntry>, RetrievalError>>>,
    calls: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl MockCommentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `entries` for `locator`
    pub fn with_thread(self, locator: &str, entries: Vec<ThreadEntry>) -> Self {
        self.threads
            .lock()
            .unwrap()
            .insert(locator.to_string(), Ok(entries));
        self
    }

    /// Fail every fetch of `locator` with `error`
    pub fn with_error(self, locator: &str, error: RetrievalError) -> Self {
        self.threads
            .lock()
            .unwrap()
            .insert(locator.to_string(), Err(error));
        self
    }

    /// Sleep for `delay` before answering each fetch
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get all locators that were fetched
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseCommentSource for MockCommentSource {
    async fn top_level_entries(&self, locator: &str) -> Result<Vec<ThreadEntry>, RetrievalError> {
        self.calls.lock().unwrap().push(locator.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.threads
            .lock()
            .unwrap()
            .get(locator)
            .cloned()
            .unwrap_or_else(|| {
                Err(RetrievalError::NotFound {
                    locator: locator.to_string(),
                })
            })
    }
}

// =============================================================================
// Mock Sentiment Model
// =============================================================================

const NEGATIVE_WORDS: &[&str] = &["hate", "awful", "terrible", "worst"];

/// Keyword classifier: texts containing a negative word are `NEGATIVE`,
/// everything else `POSITIVE`.
pub struct MockSentimentModel {
    batches: Mutex<Vec<Vec<String>>>,
    score: Option<f64>,
    max_input_chars: Option<usize>,
    unavailable: Option<String>,
    drop_last: bool,
}

impl Default for MockSentimentModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSentimentModel {
    pub fn new() -> Self {
        Self {
            batches: Mutex::new(Vec::new()),
            score: None,
            max_input_chars: None,
            unavailable: None,
            drop_last: false,
        }
    }

    /// A model whose every call fails
    pub fn unavailable(reason: &str) -> Self {
        Self {
            unavailable: Some(reason.to_string()),
            ..Self::new()
        }
    }

    /// Report `score` for every input instead of the keyword defaults
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = Some(max);
        self
    }

    /// Return one result fewer than requested
    pub fn dropping_last_result(mut self) -> Self {
        self.drop_last = true;
        self
    }

    /// Every batch passed to `classify`, in call order
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }

    fn classify_one(&self, text: &str) -> SentimentResult {
        let lower = text.to_lowercase();
        if NEGATIVE_WORDS.iter().any(|word| lower.contains(word)) {
            SentimentResult::new("NEGATIVE", self.score.unwrap_or(0.999_123_4))
        } else {
            SentimentResult::new("POSITIVE", self.score.unwrap_or(0.999_876_5))
        }
    }
}

#[async_trait]
impl BaseSentimentModel for MockSentimentModel {
    fn model_id(&self) -> &str {
        "mock/keyword-sentiment"
    }

    fn max_input_chars(&self) -> Option<usize> {
        self.max_input_chars
    }

    async fn classify(&self, texts: &[String]) -> Result<Vec<SentimentResult>, ScoringUnavailable> {
        if let Some(reason) = &self.unavailable {
            return Err(ScoringUnavailable::new(reason.clone()));
        }

        self.batches.lock().unwrap().push(texts.to_vec());

        let mut results: Vec<SentimentResult> =
            texts.iter().map(|text| self.classify_one(text)).collect();
        if self.drop_last {
            results.pop();
        }
        Ok(results)
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder for ServerDeps backed by mocks
pub struct TestDependencies {
    comment_source: Arc<dyn BaseCommentSource>,
    sentiment_model: Arc<dyn BaseSentimentModel>,
    sentiment_batch_size: usize,
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            comment_source: Arc::new(MockCommentSource::new()),
            sentiment_model: Arc::new(MockSentimentModel::new()),
            sentiment_batch_size: 32,
        }
    }

    pub fn comment_source(mut self, source: MockCommentSource) -> Self {
        self.comment_source = Arc::new(source);
        self
    }

    /// Use a shared source so the test can inspect calls afterwards
    pub fn comment_source_arc(mut self, source: Arc<MockCommentSource>) -> Self {
        self.comment_source = source;
        self
    }

    pub fn sentiment_model(mut self, model: MockSentimentModel) -> Self {
        self.sentiment_model = Arc::new(model);
        self
    }

    /// Use a shared model so the test can inspect batches afterwards
    pub fn sentiment_model_arc(mut self, model: Arc<MockSentimentModel>) -> Self {
        self.sentiment_model = model;
        self
    }

    pub fn sentiment_batch_size(mut self, size: usize) -> Self {
        self.sentiment_batch_size = size;
        self
    }

    pub fn into_server_deps(self) -> ServerDeps {
        ServerDeps::new(
            self.comment_source,
            self.sentiment_model,
            self.sentiment_batch_size,
        )
    }
}
