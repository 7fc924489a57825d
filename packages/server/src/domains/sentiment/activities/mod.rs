pub mod score_comments;

pub use score_comments::{score_comments, truncate_chars};
