pub mod analyze_post;

pub use analyze_post::{analyze_post, combine};
