use serde::{Deserialize, Serialize};

/// A submitted post, identified by its URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub url: String,
}

impl Post {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
