pub mod fetch_comments;

pub use fetch_comments::{fetch_comments, select_top_level_comments};
