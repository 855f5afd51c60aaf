//! Novels domain - read-only views over the novel catalog
//!
//! # Components
//!
//! - `models/` - Rows as stored (Novel, Genre, PlatformInfo)
//! - `data/` - Enriched views returned by the API (NovelDetail, PlatformNovel)
//! - `catalog` - Aggregation: base query + per-novel follow-up queries

pub mod catalog;
pub mod data;
pub mod models;

pub use catalog::NovelCatalog;
pub use data::{NovelDetail, PlatformNovel};
pub use models::{Genre, Novel, NovelOnPlatform, PlatformInfo, PlatformListing};
