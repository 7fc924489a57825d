use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Polarity label and confidence for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Label exactly as the model names it (e.g. `POSITIVE`).
    pub label: String,
    pub score: f64,
}

impl SentimentResult {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// Same label, score rounded to 4 decimals and clamped to [0, 1].
    pub fn rounded(self) -> Self {
        Self {
            score: round_score(self.score),
            ..self
        }
    }
}

/// Round a confidence to 4 decimal digits, clamped to [0, 1].
pub fn round_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    ((score.clamp(0.0, 1.0) * 10_000.0).round()) / 10_000.0
}

/// The classification model cannot be used.
#[derive(Debug, Clone, Error)]
#[error("sentiment model unavailable: {reason}")]
pub struct ScoringUnavailable {
    pub reason: String,
}

impl ScoringUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_four_decimals() {
        assert_eq!(round_score(0.998_765_4), 0.9988);
        assert_eq!(round_score(0.000_04), 0.0);
        assert_eq!(round_score(0.000_05), 0.0001);
        assert_eq!(round_score(1.0), 1.0);
    }

    #[test]
    fn clamps_out_of_range_scores() {
        assert_eq!(round_score(1.000_2), 1.0);
        assert_eq!(round_score(-0.1), 0.0);
        assert_eq!(round_score(f64::NAN), 0.0);
    }

    #[test]
    fn rounded_keeps_label() {
        let result = SentimentResult::new("NEGATIVE", 0.912_345).rounded();
        assert_eq!(result, SentimentResult::new("NEGATIVE", 0.9123));
    }
}
