// Business domains
pub mod analysis;
pub mod comments;
pub mod sentiment;
pub mod submission;
