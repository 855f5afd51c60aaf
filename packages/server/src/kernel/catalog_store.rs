//! Postgres-backed catalog store.
//!
//! Thin adapter from [`BaseCatalogStore`] onto the model query methods. No
//! per-query timeout is applied; a slow statement holds the request for as long
//! as Postgres takes (only pool acquisition is bounded, by sqlx's default).

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::{NovelId, PageWindow};
use crate::domains::crawling::models::CrawlerLog;
use crate::domains::novels::models::{Genre, Novel, NovelOnPlatform, PlatformInfo};
use crate::domains::platforms::models::{NewPlatform, Platform};
use crate::kernel::{BaseCatalogStore, PoolStatus};

#[derive(Clone)]
pub struct PostgresCatalogStore {
    pool: PgPool,
}

impl PostgresCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BaseCatalogStore for PostgresCatalogStore {
    async fn novels_page(&self, genre: Option<&str>, window: PageWindow) -> Result<Vec<Novel>> {
        match genre {
            Some(genre) => Novel::find_page_by_genre(genre, window, &self.pool).await,
            None => Novel::find_page(window, &self.pool).await,
        }
    }

    async fn novels_on_platform(
        &self,
        platform_name: &str,
        window: PageWindow,
    ) -> Result<Vec<NovelOnPlatform>> {
        Novel::find_page_on_platform(platform_name, window, &self.pool).await
    }

    async fn novel_by_id(&self, id: NovelId) -> Result<Option<Novel>> {
        Novel::find_by_id(id, &self.pool).await
    }

    async fn genre_names_for(&self, novel_id: NovelId) -> Result<Vec<String>> {
        Genre::find_names_for_novel(novel_id, &self.pool).await
    }

    async fn platform_infos_for(&self, novel_id: NovelId) -> Result<Vec<PlatformInfo>> {
        PlatformInfo::find_for_novel(novel_id, &self.pool).await
    }

    async fn popular_novels(&self, limit: i64) -> Result<Vec<Novel>> {
        Novel::find_popular(limit, &self.pool).await
    }

    async fn all_genres(&self) -> Result<Vec<Genre>> {
        Genre::find_all(&self.pool).await
    }

    async fn all_platforms(&self) -> Result<Vec<Platform>> {
        Platform::find_all(&self.pool).await
    }

    async fn create_platform(&self, new: &NewPlatform) -> Result<Option<Platform>> {
        Platform::create(new, &self.pool).await
    }

    async fn recent_crawler_logs(&self, limit: i64) -> Result<Vec<CrawlerLog>> {
        CrawlerLog::find_recent(limit, &self.pool).await
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn pool_status(&self) -> Option<PoolStatus> {
        Some(PoolStatus {
            size: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        })
    }
}
