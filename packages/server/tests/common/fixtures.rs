//! Test fixtures for creating catalog data.
//!
//! The API never writes novels, genres or listings (the crawler does), so these
//! fixtures insert rows with plain SQL the way the crawler would.

use anyhow::Result;
use sqlx::PgPool;
use webnovel_core::common::{GenreId, NovelId};

/// Create a novel with the given popularity, crawled `minutes_ago` minutes ago
pub async fn create_test_novel(
    pool: &PgPool,
    title: &str,
    popularity: i64,
    minutes_ago: i32,
) -> Result<NovelId> {
    let id = sqlx::query_scalar::<_, NovelId>(
        r#"
        INSERT INTO novels (title, normalized_title, author, popularity, last_crawled_at)
        VALUES ($1, lower($1), 'Test Author', $2, NOW() - make_interval(mins => $3))
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(popularity)
    .bind(minutes_ago)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Create a novel that has never been crawled (`last_crawled_at` is NULL)
pub async fn create_uncrawled_novel(
    pool: &PgPool,
    title: &str,
    popularity: i64,
) -> Result<NovelId> {
    let id = sqlx::query_scalar::<_, NovelId>(
        r#"
        INSERT INTO novels (title, normalized_title, author, popularity, last_crawled_at)
        VALUES ($1, lower($1), 'Test Author', $2, NULL)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(popularity)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Find or create a genre by name
pub async fn create_test_genre(pool: &PgPool, name: &str) -> Result<GenreId> {
    let id = sqlx::query_scalar::<_, GenreId>(
        r#"
        INSERT INTO genres (name, normalized_name)
        VALUES ($1, lower($1))
        ON CONFLICT (name) DO UPDATE SET normalized_name = EXCLUDED.normalized_name
        RETURNING id
        "#,
    )
    .bind(name)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Tag a novel with a genre
pub async fn tag_novel(pool: &PgPool, novel_id: NovelId, genre_id: GenreId) -> Result<()> {
    sqlx::query("INSERT INTO novel_genres (novel_id, genre_id) VALUES ($1, $2)")
        .bind(novel_id)
        .bind(genre_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// List a novel on a platform
pub async fn list_on_platform(pool: &PgPool, novel_id: NovelId, platform_name: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO platform_infos (novel_id, platform_name, external_id, url, view_count, rating, last_update_at)
        VALUES ($1, $2, $3, $4, 1000, 9.1, NOW())
        "#,
    )
    .bind(novel_id)
    .bind(platform_name)
    .bind(format!("{}-{}", platform_name, novel_id))
    .bind(format!("https://{}.example/novels/{}", platform_name, novel_id))
    .execute(pool)
    .await?;
    Ok(())
}

/// Record a crawler run that started `minutes_ago` minutes ago
pub async fn create_crawler_log(
    pool: &PgPool,
    platform_name: &str,
    status: &str,
    minutes_ago: i32,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO crawler_logs (platform_name, start_time, status)
        VALUES ($1, NOW() - make_interval(mins => $2), $3)
        "#,
    )
    .bind(platform_name)
    .bind(minutes_ago)
    .bind(status)
    .execute(pool)
    .await?;
    Ok(())
}
