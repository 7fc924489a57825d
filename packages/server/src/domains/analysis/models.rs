use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use thiserror::Error;

use crate::domains::comments::RetrievalError;
use crate::domains::sentiment::ScoringUnavailable;

/// A scored comment at its 1-based position in retrieval order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedComment {
    #[serde(skip)]
    pub index: usize,
    pub comment: String,
    pub label: String,
    pub score: f64,
}

/// Scored comments of one post, serialized as `{"1": {...}, "2": {...}}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisReport {
    entries: Vec<AnalyzedComment>,
}

impl AnalysisReport {
    pub(crate) fn new(entries: Vec<AnalyzedComment>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[AnalyzedComment] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&AnalyzedComment> {
        index
            .checked_sub(1)
            .and_then(|position| self.entries.get(position))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AnalysisReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.index, entry)?;
        }
        map.end()
    }
}

/// Either stage of the pipeline failed.
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Scoring(#[from] ScoringUnavailable),
}
