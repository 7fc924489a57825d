// HTTP routes
pub mod comments;
pub mod health;
pub mod posts;
pub mod root;

pub use comments::*;
pub use health::*;
pub use posts::*;
pub use root::*;
