use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{NovelId, PageWindow};

/// A serialized work tracked across platforms
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Novel {
    pub id: NovelId,
    pub title: String,
    pub normalized_title: Option<String>,
    pub author: Option<String>,
    pub normalized_author: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub status: Option<String>, // 'ongoing', 'completed', ... as reported by the crawler
    pub popularity: i64,
    pub last_crawled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Platform-specific columns joined onto a novel row by platform listings.
///
/// Excludes `platform_infos.id`/`novel_id` so the novel's own `id` is never shadowed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlatformListing {
    pub platform_name: String,
    pub external_id: Option<String>,
    pub url: Option<String>,
    pub view_count: Option<i64>,
    pub rating: Option<f64>,
    pub review_count: Option<i32>,
    pub is_paid: Option<bool>,
    pub price: Option<i32>,
    pub platform_genre: Option<String>,
    pub last_update_at: Option<DateTime<Utc>>,
}

/// A novel row joined with its listing on one platform
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct NovelOnPlatform {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub novel: Novel,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub listing: PlatformListing,
}

/// Number of rows returned by the popularity ranking.
pub const POPULAR_LIMIT: i64 = 10;

// =============================================================================
// Novel Queries
// =============================================================================
//
// Ties in `popularity` / `last_crawled_at` have no secondary sort key; their
// relative order is whatever Postgres returns.

impl Novel {
    /// Find a novel by ID
    pub async fn find_by_id(id: NovelId, pool: &PgPool) -> Result<Option<Self>> {
        let novel = sqlx::query_as::<_, Novel>("SELECT * FROM novels WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(novel)
    }

    /// One page of all novels, most popular first
    pub async fn find_page(window: PageWindow, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Novel>(
            "SELECT * FROM novels ORDER BY popularity DESC LIMIT $1 OFFSET $2",
        )
        .bind(window.limit())
        .bind(window.offset())
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// One page of novels tagged with the named genre, most popular first
    pub async fn find_page_by_genre(
        genre: &str,
        window: PageWindow,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Novel>(
            r#"
            SELECT n.*
            FROM novels n
            INNER JOIN novel_genres ng ON n.id = ng.novel_id
            INNER JOIN genres g ON ng.genre_id = g.id
            WHERE g.name = $1
            ORDER BY n.popularity DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(genre)
        .bind(window.limit())
        .bind(window.offset())
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// One page of novels listed on a platform, most recently crawled first
    pub async fn find_page_on_platform(
        platform_name: &str,
        window: PageWindow,
        pool: &PgPool,
    ) -> Result<Vec<NovelOnPlatform>> {
        sqlx::query_as::<_, NovelOnPlatform>(
            r#"
            SELECT n.*,
                   pi.platform_name, pi.external_id, pi.url, pi.view_count, pi.rating,
                   pi.review_count, pi.is_paid, pi.price, pi.platform_genre, pi.last_update_at
            FROM novels n
            INNER JOIN platform_infos pi ON n.id = pi.novel_id
            WHERE pi.platform_name = $1
            ORDER BY n.last_crawled_at DESC NULLS LAST
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(platform_name)
        .bind(window.limit())
        .bind(window.offset())
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Most popular novels
    pub async fn find_popular(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Novel>("SELECT * FROM novels ORDER BY popularity DESC LIMIT $1")
            .bind(limit)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
