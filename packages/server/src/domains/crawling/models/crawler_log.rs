use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::CrawlerLogId;

/// Number of log rows reported by the crawler status endpoint.
pub const RECENT_LOG_LIMIT: i64 = 10;

/// One crawl run, as recorded by the crawler service
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CrawlerLog {
    pub id: CrawlerLogId,
    pub platform_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: String, // 'IN_PROGRESS', 'COMPLETED', 'FAILED'
    pub novels_fetched: Option<i32>,
    pub chapters_updated: Option<i32>,
    pub error_message: Option<String>,
}

impl CrawlerLog {
    /// Most recently started runs first
    pub async fn find_recent(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, CrawlerLog>(
            "SELECT * FROM crawler_logs ORDER BY start_time DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
