pub mod novel_views;

pub use novel_views::{NovelDetail, PlatformNovel};
