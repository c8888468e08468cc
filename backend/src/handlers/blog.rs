//! HTTP handlers for the blog

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{BlogPost, BlogPostSummary},
    services::{blog::POSTS_PER_PAGE, BlogService},
    AppState,
};
use shared::{PaginatedResponse, Pagination};

#[derive(Debug, Deserialize)]
pub struct BlogListQuery {
    /// Raw page number; anything unparseable or below 1 means the first page
    pub page: Option<String>,
}

impl BlogListQuery {
    pub fn pagination(&self) -> Pagination {
        let page = self
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Pagination::new(page, POSTS_PER_PAGE)
    }
}

/// List blog posts, newest first
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<BlogListQuery>,
) -> AppResult<Json<PaginatedResponse<BlogPostSummary>>> {
    let service = BlogService::new(state.db);
    let page = service.list_posts(query.pagination()).await?;
    Ok(Json(page))
}

/// Get a single blog post; an id that is not a number names no post
pub async fn get_post(
    State(state): State<AppState>,
    post_id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<BlogPost>> {
    let Path(post_id) = post_id.map_err(|_| AppError::NotFound("Blog post".to_string()))?;
    let service = BlogService::new(state.db);
    let post = service.get_post(post_id).await?;
    Ok(Json(post))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>) -> BlogListQuery {
        BlogListQuery {
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn test_page_parsing() {
        assert_eq!(query(None).pagination().page, 1);
        assert_eq!(query(Some("3")).pagination().page, 3);
        assert_eq!(query(Some("0")).pagination().page, 1);
        assert_eq!(query(Some("abc")).pagination().page, 1);
        assert_eq!(query(Some("2")).pagination().offset(), 5);
    }
}
