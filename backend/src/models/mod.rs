//! Database models for the TasteMongers site
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
