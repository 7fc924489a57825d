pub mod activities;
pub mod models;

pub use activities::{fetch_comments, select_top_level_comments};
pub use models::{RetrievalError, ThreadEntry};
