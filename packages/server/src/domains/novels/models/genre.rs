use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{GenreId, NovelId};

/// Genre label shared by many novels (name is unique)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
    pub normalized_name: Option<String>,
}

impl Genre {
    /// All genres, in storage order
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Genre>("SELECT * FROM genres")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Names of the genres attached to a novel
    pub async fn find_names_for_novel(novel_id: NovelId, pool: &PgPool) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT g.name
            FROM genres g
            INNER JOIN novel_genres ng ON g.id = ng.genre_id
            WHERE ng.novel_id = $1
            ORDER BY g.name
            "#,
        )
        .bind(novel_id)
        .fetch_all(pool)
        .await?;
        Ok(names)
    }
}
