//! Domain models for the TasteMongers site

mod blog;
mod newsletter;
mod rating;

pub use blog::*;
pub use newsletter::*;
pub use rating::*;
