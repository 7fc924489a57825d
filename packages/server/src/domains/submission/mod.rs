pub mod models;
pub mod slot;

pub use models::Post;
pub use slot::LatestPostSlot;
