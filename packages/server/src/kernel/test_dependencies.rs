// Test dependencies - in-memory implementations for testing
//
// Provides a mock catalog store that can be injected anywhere a
// BaseCatalogStore is expected (catalog unit tests, router tests).

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{BaseCatalogStore, PoolStatus};
use crate::common::{CrawlerLogId, GenreId, NovelId, PageWindow, PlatformId, PlatformInfoId};
use crate::domains::crawling::models::CrawlerLog;
use crate::domains::novels::models::{Genre, Novel, NovelOnPlatform, PlatformInfo, PlatformListing};
use crate::domains::platforms::models::{NewPlatform, Platform};

// =============================================================================
// Failure injection
// =============================================================================

/// Which store call should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    NovelsPage,
    NovelsOnPlatform,
    GenreNames,
    PlatformInfos,
    Ping,
    All,
}

// =============================================================================
// Mock Catalog Store
// =============================================================================

#[derive(Default)]
struct CatalogState {
    novels: Vec<Novel>,
    genres: Vec<Genre>,
    novel_genres: Vec<(NovelId, GenreId)>,
    platform_infos: Vec<PlatformInfo>,
    platforms: Vec<Platform>,
    crawler_logs: Vec<CrawlerLog>,
}

/// In-memory catalog with the same ordering rules as the Postgres queries.
///
/// Cloning shares the underlying state, so a test can keep a handle for
/// assertions after moving a clone into the code under test.
#[derive(Clone, Default)]
pub struct MockCatalogStore {
    state: Arc<Mutex<CatalogState>>,
    fail_on: Option<FailOn>,
    genre_lookups: Arc<AtomicUsize>,
}

impl MockCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a novel; `last_crawled_at` grows with the id so later ids are "fresher"
    pub fn with_novel(self, id: i64, title: &str, popularity: i64) -> Self {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        self.state.lock().unwrap().novels.push(Novel {
            id: NovelId::from_i64(id),
            title: title.to_string(),
            normalized_title: Some(title.to_lowercase()),
            author: None,
            normalized_author: None,
            description: None,
            cover_image_url: None,
            status: None,
            popularity,
            last_crawled_at: Some(epoch + Duration::minutes(id)),
            created_at: epoch,
        });
        self
    }

    /// Add a novel the crawler has not visited yet (`last_crawled_at` is NULL)
    pub fn with_uncrawled_novel(self, id: i64, title: &str, popularity: i64) -> Self {
        let novel_id = NovelId::from_i64(id);
        let this = self.with_novel(id, title, popularity);
        {
            let mut state = this.state.lock().unwrap();
            if let Some(novel) = state.novels.iter_mut().find(|n| n.id == novel_id) {
                novel.last_crawled_at = None;
            }
        }
        this
    }

    pub fn with_genre(self, id: i64, name: &str) -> Self {
        self.state.lock().unwrap().genres.push(Genre {
            id: GenreId::from_i64(id),
            name: name.to_string(),
            normalized_name: Some(name.to_lowercase()),
        });
        self
    }

    pub fn with_novel_genre(self, novel_id: i64, genre_id: i64) -> Self {
        self.state
            .lock()
            .unwrap()
            .novel_genres
            .push((NovelId::from_i64(novel_id), GenreId::from_i64(genre_id)));
        self
    }

    pub fn with_platform_info(self, id: i64, novel_id: i64, platform_name: &str) -> Self {
        self.state.lock().unwrap().platform_infos.push(PlatformInfo {
            id: PlatformInfoId::from_i64(id),
            novel_id: NovelId::from_i64(novel_id),
            platform_name: platform_name.to_string(),
            external_id: Some(format!("{}-{}", platform_name, novel_id)),
            url: Some(format!("https://{}.example/novels/{}", platform_name, novel_id)),
            view_count: Some(1000 * novel_id),
            rating: Some(9.5),
            review_count: Some(10),
            is_paid: Some(false),
            price: None,
            platform_genre: None,
            last_update_at: None,
        });
        self
    }

    pub fn with_crawler_log(self, id: i64, platform_name: &str, minutes_after_epoch: i64) -> Self {
        self.state.lock().unwrap().crawler_logs.push(CrawlerLog {
            id: CrawlerLogId::from_i64(id),
            platform_name: platform_name.to_string(),
            start_time: DateTime::<Utc>::UNIX_EPOCH + Duration::minutes(minutes_after_epoch),
            end_time: None,
            status: "COMPLETED".to_string(),
            novels_fetched: Some(0),
            chapters_updated: Some(0),
            error_message: None,
        });
        self
    }

    /// Make one kind of call (or every call) fail with a store error
    pub fn failing_on(mut self, fail_on: FailOn) -> Self {
        self.fail_on = Some(fail_on);
        self
    }

    /// Number of genre follow-up queries issued so far
    pub fn genre_lookups(&self) -> usize {
        self.genre_lookups.load(Ordering::SeqCst)
    }

    pub fn platform_count(&self) -> usize {
        self.state.lock().unwrap().platforms.len()
    }

    fn check(&self, call: FailOn) -> Result<()> {
        match self.fail_on {
            Some(FailOn::All) => anyhow::bail!("simulated store failure"),
            Some(f) if f == call => anyhow::bail!("simulated store failure on {:?}", call),
            _ => Ok(()),
        }
    }
}

fn page<T>(rows: Vec<T>, window: PageWindow) -> Vec<T> {
    rows.into_iter()
        .skip(window.offset() as usize)
        .take(window.limit() as usize)
        .collect()
}

#[async_trait]
impl BaseCatalogStore for MockCatalogStore {
    async fn novels_page(&self, genre: Option<&str>, window: PageWindow) -> Result<Vec<Novel>> {
        self.check(FailOn::NovelsPage)?;
        let state = self.state.lock().unwrap();

        let mut novels: Vec<Novel> = state
            .novels
            .iter()
            .filter(|novel| match genre {
                None => true,
                Some(name) => state.novel_genres.iter().any(|(novel_id, genre_id)| {
                    *novel_id == novel.id
                        && state
                            .genres
                            .iter()
                            .any(|g| g.id == *genre_id && g.name == name)
                }),
            })
            .cloned()
            .collect();
        novels.sort_by(|a, b| b.popularity.cmp(&a.popularity));

        Ok(page(novels, window))
    }

    async fn novels_on_platform(
        &self,
        platform_name: &str,
        window: PageWindow,
    ) -> Result<Vec<NovelOnPlatform>> {
        self.check(FailOn::NovelsOnPlatform)?;
        let state = self.state.lock().unwrap();

        let mut rows: Vec<NovelOnPlatform> = state
            .platform_infos
            .iter()
            .filter(|info| info.platform_name == platform_name)
            .filter_map(|info| {
                let novel = state.novels.iter().find(|n| n.id == info.novel_id)?;
                Some(NovelOnPlatform {
                    novel: novel.clone(),
                    listing: PlatformListing {
                        platform_name: info.platform_name.clone(),
                        external_id: info.external_id.clone(),
                        url: info.url.clone(),
                        view_count: info.view_count,
                        rating: info.rating,
                        review_count: info.review_count,
                        is_paid: info.is_paid,
                        price: info.price,
                        platform_genre: info.platform_genre.clone(),
                        last_update_at: info.last_update_at,
                    },
                })
            })
            .collect();
        // DESC NULLS LAST: `None` orders below every `Some`
        rows.sort_by(|a, b| b.novel.last_crawled_at.cmp(&a.novel.last_crawled_at));

        Ok(page(rows, window))
    }

    async fn novel_by_id(&self, id: NovelId) -> Result<Option<Novel>> {
        self.check(FailOn::All)?;
        let state = self.state.lock().unwrap();
        Ok(state.novels.iter().find(|n| n.id == id).cloned())
    }

    async fn genre_names_for(&self, novel_id: NovelId) -> Result<Vec<String>> {
        self.genre_lookups.fetch_add(1, Ordering::SeqCst);
        self.check(FailOn::GenreNames)?;
        let state = self.state.lock().unwrap();

        let mut names: Vec<String> = state
            .novel_genres
            .iter()
            .filter(|(id, _)| *id == novel_id)
            .filter_map(|(_, genre_id)| state.genres.iter().find(|g| g.id == *genre_id))
            .map(|g| g.name.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn platform_infos_for(&self, novel_id: NovelId) -> Result<Vec<PlatformInfo>> {
        self.check(FailOn::PlatformInfos)?;
        let state = self.state.lock().unwrap();

        let mut infos: Vec<PlatformInfo> = state
            .platform_infos
            .iter()
            .filter(|info| info.novel_id == novel_id)
            .cloned()
            .collect();
        infos.sort_by_key(|info| info.id);
        Ok(infos)
    }

    async fn popular_novels(&self, limit: i64) -> Result<Vec<Novel>> {
        self.check(FailOn::All)?;
        let state = self.state.lock().unwrap();

        let mut novels = state.novels.clone();
        novels.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        novels.truncate(limit.max(0) as usize);
        Ok(novels)
    }

    async fn all_genres(&self) -> Result<Vec<Genre>> {
        self.check(FailOn::All)?;
        Ok(self.state.lock().unwrap().genres.clone())
    }

    async fn all_platforms(&self) -> Result<Vec<Platform>> {
        self.check(FailOn::All)?;
        Ok(self.state.lock().unwrap().platforms.clone())
    }

    async fn create_platform(&self, new: &NewPlatform) -> Result<Option<Platform>> {
        self.check(FailOn::All)?;
        let mut state = self.state.lock().unwrap();

        if state.platforms.iter().any(|p| p.name == new.name) {
            return Ok(None);
        }

        let now = Utc::now();
        let platform = Platform {
            id: PlatformId::from_i64(state.platforms.len() as i64 + 1),
            name: new.name.clone(),
            base_url: new.base_url.clone(),
            created_at: now,
            updated_at: now,
        };
        state.platforms.push(platform.clone());
        Ok(Some(platform))
    }

    async fn recent_crawler_logs(&self, limit: i64) -> Result<Vec<CrawlerLog>> {
        self.check(FailOn::All)?;
        let state = self.state.lock().unwrap();

        let mut logs = state.crawler_logs.clone();
        logs.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        logs.truncate(limit.max(0) as usize);
        Ok(logs)
    }

    async fn ping(&self) -> Result<()> {
        self.check(FailOn::Ping)
    }

    fn pool_status(&self) -> Option<PoolStatus> {
        None
    }
}
