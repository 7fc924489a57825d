use serde::{Deserialize, Serialize};

use crate::error::{HuggingFaceError, Result};

/// Request body for a text-classification call.
#[derive(Debug, Clone, Serialize)]
pub struct TextClassificationRequest<'a> {
    pub inputs: &'a [String],
}

/// One candidate label with its probability.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassificationLabel {
    pub label: String,
    pub score: f64,
}

/// Text-classification responses come back either nested (one list of
/// candidates per input) or flat, depending on the provider and input count.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextClassificationResponse {
    Nested(Vec<Vec<ClassificationLabel>>),
    Flat(Vec<ClassificationLabel>),
}

impl TextClassificationResponse {
    /// Normalize into one candidate list per input.
    ///
    /// A flat response is read as the candidates of a single input when one
    /// input was sent, and as one top candidate per input otherwise.
    pub fn into_per_input(self, input_count: usize) -> Result<Vec<Vec<ClassificationLabel>>> {
        let per_input = match self {
            Self::Nested(nested) => nested,
            Self::Flat(flat) if input_count == 1 => vec![flat],
            Self::Flat(flat) => flat.into_iter().map(|label| vec![label]).collect(),
        };

        if per_input.len() != input_count {
            return Err(HuggingFaceError::Parse(format!(
                "expected {} classifications, got {}",
                input_count,
                per_input.len()
            )));
        }

        Ok(per_input)
    }
}

/// Highest-scoring candidate of a classification.
pub fn top_label(candidates: &[ClassificationLabel]) -> Option<&ClassificationLabel> {
    candidates
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
}

/// Error payload returned by the inference API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}

/// Subset of the hub's model metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    #[serde(default)]
    pub pipeline_tag: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub gated: serde_json::Value,
}
