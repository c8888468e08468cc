//! Business logic services for the TasteMongers site

pub mod blog;
pub mod newsletter;
pub mod rating;

pub use blog::BlogService;
pub use newsletter::NewsletterService;
pub use rating::RatingService;
