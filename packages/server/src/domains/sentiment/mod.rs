pub mod activities;
pub mod models;

pub use activities::{score_comments, truncate_chars};
pub use models::{round_score, ScoringUnavailable, SentimentResult};
