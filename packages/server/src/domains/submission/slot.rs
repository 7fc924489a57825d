use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domains::submission::models::Post;

/// Holds the most recently submitted post.
///
/// Cloning shares the same slot. Reads return a copy so callers never hold
/// the lock while talking to external services.
#[derive(Debug, Clone, Default)]
pub struct LatestPostSlot {
    inner: Arc<RwLock<Option<Post>>>,
}

impl LatestPostSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `post`, returning the one it replaced.
    pub async fn replace(&self, post: Post) -> Option<Post> {
        self.inner.write().await.replace(post)
    }

    pub async fn get(&self) -> Option<Post> {
        self.inner.read().await.clone()
    }
}
