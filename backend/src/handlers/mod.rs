//! HTTP handlers for the TasteMongers API

pub mod blog;
pub mod health;
pub mod newsletter;
pub mod ratings;

pub use blog::{get_post, list_posts};
pub use health::health_check;
pub use newsletter::subscribe;
pub use ratings::list_ratings;
