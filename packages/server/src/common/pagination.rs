//! Offset-based pagination for catalog listings.
//!
//! Listings take a zero-based `page` and a page `size` from the query string
//! and translate them into `LIMIT size OFFSET page * size`.
//!
//! # Usage
//!
//! ```rust,ignore
//! // In an axum handler
//! let page = params.validate()?;
//!
//! // In the store
//! Novel::find_page(page.limit(), page.offset(), pool).await?;
//! ```

use serde::Deserialize;

use crate::common::errors::{ApiError, ApiResult};

/// Default zero-based page number.
pub const DEFAULT_PAGE: i64 = 0;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

// ============================================================================
// Query-string arguments
// ============================================================================

/// Raw `page`/`size` query parameters, as supplied by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PageParams {
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    /// Validate the arguments and compute the row window.
    ///
    /// Rules:
    /// - Missing values fall back to page 0, size 10
    /// - Negative values are rejected
    /// - `size = 0` is valid and yields an empty page
    /// - An offset that overflows `i64` is rejected
    pub fn validate(&self) -> ApiResult<PageWindow> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let size = self.size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page < 0 {
            return Err(ApiError::BadRequest(format!(
                "page must be non-negative, got {}",
                page
            )));
        }
        if size < 0 {
            return Err(ApiError::BadRequest(format!(
                "size must be non-negative, got {}",
                size
            )));
        }

        let offset = page
            .checked_mul(size)
            .ok_or_else(|| ApiError::BadRequest("page * size is out of range".to_string()))?;

        Ok(PageWindow {
            limit: size,
            offset,
        })
    }
}

// ============================================================================
// Validated window
// ============================================================================

/// A validated `LIMIT`/`OFFSET` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    limit: i64,
    offset: i64,
}

impl PageWindow {
    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Whether this window can't contain any rows.
    pub fn is_empty(&self) -> bool {
        self.limit == 0
    }
}

// ============================================================================
// Tests
// ============================================================================
