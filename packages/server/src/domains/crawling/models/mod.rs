pub mod crawler_log;

pub use crawler_log::{CrawlerLog, RECENT_LOG_LIMIT};
