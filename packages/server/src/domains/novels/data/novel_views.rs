use serde::{Deserialize, Serialize};

use crate::domains::novels::models::{Novel, NovelOnPlatform, PlatformInfo};

/// A novel with everything known about it: genre names and per-platform listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NovelDetail {
    #[serde(flatten)]
    pub novel: Novel,
    pub genres: Vec<String>,
    pub platforms: Vec<PlatformInfo>,
}

/// A platform listing row with the novel's genre names attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformNovel {
    #[serde(flatten)]
    pub row: NovelOnPlatform,
    pub genres: Vec<String>,
}
