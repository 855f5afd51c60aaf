//! Crawling domain - hand-off to the external crawler service
//!
//! This service never crawls anything itself. It forwards triggers to the
//! crawler (`dispatcher`) and reports the crawler's run history, which the
//! crawler writes into `crawler_logs` (`models`).

pub mod dispatcher;
pub mod models;

pub use dispatcher::{CrawlAck, CrawlDispatcher};
pub use models::{CrawlerLog, RECENT_LOG_LIMIT};

use crate::common::ApiResult;
use crate::kernel::BaseCatalogStore;

/// The most recent crawler runs, newest first.
pub async fn recent_runs(store: &dyn BaseCatalogStore) -> ApiResult<Vec<CrawlerLog>> {
    Ok(store.recent_crawler_logs(RECENT_LOG_LIMIT).await?)
}
