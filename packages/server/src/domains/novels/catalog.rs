//! Novel aggregation.
//!
//! Each listing runs one base query and then, per returned novel, follow-up
//! queries for its genres (and platforms, for the detail view). The follow-ups
//! are independent reads, so the genres and platforms of one novel may come
//! from different database states under concurrent writes.

use std::sync::Arc;

use tracing::debug;

use crate::common::{ApiError, ApiResult, NovelId, PageParams};
use crate::domains::novels::data::{NovelDetail, PlatformNovel};
use crate::domains::novels::models::{Genre, Novel, POPULAR_LIMIT};
use crate::kernel::BaseCatalogStore;

#[derive(Clone)]
pub struct NovelCatalog {
    store: Arc<dyn BaseCatalogStore>,
}

impl NovelCatalog {
    pub fn new(store: Arc<dyn BaseCatalogStore>) -> Self {
        Self { store }
    }

    /// Novels by descending popularity, optionally filtered by genre name.
    ///
    /// An empty genre string means "no filter".
    pub async fn list_novels(
        &self,
        genre: Option<&str>,
        params: &PageParams,
    ) -> ApiResult<Vec<Novel>> {
        let window = params.validate()?;
        if window.is_empty() {
            return Ok(Vec::new());
        }

        let genre = genre.filter(|g| !g.is_empty());
        Ok(self.store.novels_page(genre, window).await?)
    }

    /// Novels listed on `platform`, most recently crawled first, with genre names attached.
    ///
    /// Fails as a whole if any genre lookup fails; never returns a partially
    /// enriched page.
    pub async fn list_by_platform(
        &self,
        platform: &str,
        params: &PageParams,
    ) -> ApiResult<Vec<PlatformNovel>> {
        let window = params.validate()?;
        if window.is_empty() {
            return Ok(Vec::new());
        }

        let rows = self.store.novels_on_platform(platform, window).await?;
        debug!(platform = %platform, rows = rows.len(), "Enriching platform listing");

        let mut novels = Vec::with_capacity(rows.len());
        for row in rows {
            let genres = self.store.genre_names_for(row.novel.id).await?;
            novels.push(PlatformNovel { row, genres });
        }
        Ok(novels)
    }

    /// One novel with its genre names and platform listings
    pub async fn get_detail(&self, id: NovelId) -> ApiResult<NovelDetail> {
        let novel = self
            .store
            .novel_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("novel {} does not exist", id)))?;

        let genres = self.store.genre_names_for(id).await?;
        let platforms = self.store.platform_infos_for(id).await?;

        Ok(NovelDetail {
            novel,
            genres,
            platforms,
        })
    }

    /// Top 10 novels by popularity, without enrichment
    pub async fn list_popular(&self) -> ApiResult<Vec<Novel>> {
        Ok(self.store.popular_novels(POPULAR_LIMIT).await?)
    }

    pub async fn list_genres(&self) -> ApiResult<Vec<Genre>> {
        Ok(self.store.all_genres().await?)
    }
}
