//! Route definitions for the TasteMongers API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ratings", get(handlers::list_ratings))
        .route("/newsletter/subscribe", post(handlers::subscribe))
        .nest("/blog", blog_routes())
}

/// Blog routes (public, read-only)
fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_posts))
        .route("/:post_id", get(handlers::get_post))
}
