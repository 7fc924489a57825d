pub mod activities;
pub mod models;

pub use activities::{analyze_post, combine};
pub use models::{AnalysisError, AnalysisReport, AnalyzedComment};
