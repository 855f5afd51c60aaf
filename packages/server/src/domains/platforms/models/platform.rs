use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::PlatformId;

/// An external web-novel site the crawler knows about
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub id: PlatformId,
    pub name: String,
    pub base_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for registering a platform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlatform {
    pub name: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Platform {
    /// All registered platforms
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Platform>("SELECT * FROM platforms ORDER BY id")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a platform; timestamps come from column defaults.
    ///
    /// Returns `None` when the name is already taken. Existing rows are never
    /// overwritten.
    pub async fn create(new: &NewPlatform, pool: &PgPool) -> Result<Option<Self>> {
        let platform = sqlx::query_as::<_, Platform>(
            r#"
            INSERT INTO platforms (name, base_url)
            VALUES ($1, $2)
            ON CONFLICT (name) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.base_url)
        .fetch_optional(pool)
        .await?;
        Ok(platform)
    }
}
