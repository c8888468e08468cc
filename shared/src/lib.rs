//! Shared types and logic for the TasteMongers site
//!
//! This crate contains the domain models and the pure catalog and newsletter
//! logic used by both the backend and the browser (via WASM).

pub mod catalog;
pub mod models;
pub mod newsletter;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
