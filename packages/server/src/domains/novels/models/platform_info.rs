use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{NovelId, PlatformInfoId};

/// A novel's presence on one platform, maintained by the crawler
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlatformInfo {
    pub id: PlatformInfoId,
    pub novel_id: NovelId,
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

impl PlatformInfo {
    /// All platform listings of a novel
    pub async fn find_for_novel(novel_id: NovelId, pool: &PgPool) -> Result<Vec<Self>> {
        let infos = sqlx::query_as::<_, PlatformInfo>(
            "SELECT * FROM platform_infos WHERE novel_id = $1 ORDER BY id",
        )
        .bind(novel_id)
        .fetch_all(pool)
        .await?;
        Ok(infos)
    }
}
