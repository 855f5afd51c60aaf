//! Typed ID definitions for all catalog entities.
//!
//! # Example
//!
//! ```rust
//! use webnovel_core::common::{GenreId, NovelId};
//!
//! let novel_id = NovelId::from_i64(1);
//! let genre_id = GenreId::from_i64(1);
//!
//! // These are incompatible types - compiler prevents mixing them up
//! // let wrong: GenreId = novel_id;
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Novel entities.
pub struct Novel;

/// Marker type for Genre entities.
pub struct Genre;

/// Marker type for a novel's listing on one platform.
pub struct PlatformInfo;

/// Marker type for Platform entities (crawled source sites).
pub struct Platform;

/// Marker type for CrawlerLog entities.
pub struct CrawlerLog;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

pub type NovelId = Id<Novel>;

pub type GenreId = Id<Genre>;

pub type PlatformInfoId = Id<PlatformInfo>;

pub type PlatformId = Id<Platform>;

pub type CrawlerLogId = Id<CrawlerLog>;
