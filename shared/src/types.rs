//! Common types used across the site

use serde::{Deserialize, Serialize};

/// Pagination parameters (1-based page)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

impl Pagination {
    /// Build pagination from a raw page number, treating anything below 1 as 1
    pub fn new(page: i64, per_page: u32) -> Self {
        let page = page.clamp(1, u32::MAX as i64) as u32;
        Self {
            page,
            per_page: per_page.max(1),
        }
    }

    /// Row offset of the first item on this page
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.per_page as i64
    }
}

/// Paginated response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> PaginatedResponse<T> {
    /// Build a page from rows fetched with `LIMIT per_page + 1`.
    /// The extra row, if present, only signals that a next page exists.
    pub fn from_lookahead(mut rows: Vec<T>, pagination: Pagination) -> Self {
        let has_next = rows.len() > pagination.per_page as usize;
        rows.truncate(pagination.per_page as usize);
        Self {
            data: rows,
            pagination: PaginationMeta {
                page: pagination.page,
                per_page: pagination.per_page,
                has_previous: pagination.page > 1,
                has_next,
            },
        }
    }
}
