pub mod genre;
pub mod novel;
pub mod platform_info;

pub use genre::Genre;
pub use novel::{Novel, NovelOnPlatform, PlatformListing, POPULAR_LIMIT};
pub use platform_info::PlatformInfo;
