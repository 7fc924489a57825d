// Reddit Sentiment Analyzer - API Core
//
// Stores a Reddit post URL and, on demand, fetches its top-level comments and
// scores each one for sentiment polarity.
//
// Pipeline activities live in domains/*/activities; external services sit
// behind the kernel traits.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
