// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Aggregation (attaching genres/platforms to novels) lives in the novels domain
// and only talks to storage through these traits.
//
// Naming convention: Base* for trait names (e.g., BaseCatalogStore)

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::common::{NovelId, PageWindow};
use crate::domains::crawling::models::CrawlerLog;
use crate::domains::novels::models::{Genre, Novel, NovelOnPlatform, PlatformInfo};
use crate::domains::platforms::models::{NewPlatform, Platform};

// =============================================================================
// Catalog Store Trait (Infrastructure - parameterized reads over the catalog)
// =============================================================================

/// Connection pool figures reported by the health check.
#[derive(Debug, Clone, Serialize)]
pub struct PoolStatus {
    pub size: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

/// Every method is one independent statement; nothing here spans a transaction.
#[async_trait]
pub trait BaseCatalogStore: Send + Sync {
    /// One page of novels, most popular first, optionally restricted to a genre name
    async fn novels_page(&self, genre: Option<&str>, window: PageWindow) -> Result<Vec<Novel>>;

    /// One page of novels listed on a platform, most recently crawled first
    async fn novels_on_platform(
        &self,
        platform_name: &str,
        window: PageWindow,
    ) -> Result<Vec<NovelOnPlatform>>;

    /// Single-row lookup; `None` when the id does not exist
    async fn novel_by_id(&self, id: NovelId) -> Result<Option<Novel>>;

    /// Genre names attached to a novel
    async fn genre_names_for(&self, novel_id: NovelId) -> Result<Vec<String>>;

    /// Platform listings of a novel
    async fn platform_infos_for(&self, novel_id: NovelId) -> Result<Vec<PlatformInfo>>;

    /// Top `limit` novels by popularity
    async fn popular_novels(&self, limit: i64) -> Result<Vec<Novel>>;

    async fn all_genres(&self) -> Result<Vec<Genre>>;

    async fn all_platforms(&self) -> Result<Vec<Platform>>;

    /// Insert a platform; `None` if the name is already taken
    async fn create_platform(&self, new: &NewPlatform) -> Result<Option<Platform>>;

    /// Most recent crawler runs by start time
    async fn recent_crawler_logs(&self, limit: i64) -> Result<Vec<CrawlerLog>>;

    /// Round-trip to the store to prove connectivity
    async fn ping(&self) -> Result<()>;

    /// Pool utilisation, when the store is backed by a connection pool
    fn pool_status(&self) -> Option<PoolStatus> {
        None
    }
}
