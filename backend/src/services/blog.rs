//! Blog post service

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{BlogPost, BlogPostSummary};
use shared::{PaginatedResponse, Pagination};

/// Posts shown per blog list page
pub const POSTS_PER_PAGE: u32 = 5;

/// Blog service for reading posts
#[derive(Clone)]
pub struct BlogService {
    db: PgPool,
}

/// Database row for a blog post
#[derive(Debug, sqlx::FromRow)]
struct BlogPostRow {
    id: i32,
    title: String,
    content: String,
    affiliate_link: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BlogPostRow> for BlogPost {
    fn from(row: BlogPostRow) -> Self {
        BlogPost {
            id: row.id,
            title: row.title,
            content: row.content,
            affiliate_link: row.affiliate_link,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl BlogService {
    /// Create a new BlogService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get one page of posts, newest first
    pub async fn list_posts(&self, pagination: Pagination) -> AppResult<PaginatedResponse<BlogPostSummary>> {
        // One extra row tells us whether another page exists.
        let rows = sqlx::query_as::<_, BlogPostRow>(
            r#"
            SELECT id, title, content, affiliate_link, created_at, updated_at
            FROM blog_posts
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.per_page as i64 + 1)
        .bind(pagination.offset())
        .fetch_all(&self.db)
        .await?;

        let summaries = rows
            .into_iter()
            .map(|row| BlogPost::from(row).summary())
            .collect();

        Ok(PaginatedResponse::from_lookahead(summaries, pagination))
    }

    /// Get a single post
    pub async fn get_post(&self, id: i32) -> AppResult<BlogPost> {
        let row = sqlx::query_as::<_, BlogPostRow>(
            r#"
            SELECT id, title, content, affiliate_link, created_at, updated_at
            FROM blog_posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post".to_string()))?;

        Ok(row.into())
    }
}
