//! Server dependencies for request handlers (using traits for testability)
//!
//! This module provides the central dependency container shared by all routes.
//! Storage sits behind `BaseCatalogStore` so tests can swap in the in-memory mock.

use std::sync::Arc;

use crate::domains::crawling::CrawlDispatcher;
use crate::domains::novels::NovelCatalog;
use crate::kernel::BaseCatalogStore;

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseCatalogStore>,
    pub catalog: NovelCatalog,
    pub crawler: Arc<CrawlDispatcher>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(store: Arc<dyn BaseCatalogStore>, crawler: CrawlDispatcher) -> Self {
        Self {
            catalog: NovelCatalog::new(store.clone()),
            store,
            crawler: Arc::new(crawler),
        }
    }
}
