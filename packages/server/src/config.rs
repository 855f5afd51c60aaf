use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

const DEFAULT_CRAWLER_SERVICE_URL: &str = "http://localhost:3001";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub crawler: CrawlerConfig,
}

/// Settings for the external crawler service.
///
/// Passed explicitly into [`crate::domains::crawling::CrawlDispatcher`]; nothing
/// reads the crawler URL from process-wide state.
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Base URL of the crawler service, without a trailing slash
    pub service_url: String,
    /// Bound applied to both connecting and the whole request
    pub timeout: Duration,
    /// Maximum number of trigger calls allowed in flight at once
    pub max_in_flight: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_CRAWLER_SERVICE_URL.to_string(),
            timeout: Duration::from_secs(10),
            max_in_flight: 8,
        }
    }
}

impl CrawlerConfig {
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            service_url: normalize_base_url(&service_url.into()),
            ..Default::default()
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let crawler = CrawlerConfig {
            service_url: normalize_base_url(
                &env::var("CRAWLER_SERVICE_URL")
                    .unwrap_or_else(|_| DEFAULT_CRAWLER_SERVICE_URL.to_string()),
            ),
            timeout: Duration::from_secs(
                env::var("CRAWLER_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .context("CRAWLER_TIMEOUT_SECS must be a valid number of seconds")?,
            ),
            max_in_flight: env::var("CRAWLER_MAX_IN_FLIGHT")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .context("CRAWLER_MAX_IN_FLIGHT must be a valid number")?,
        };

        if crawler.service_url.is_empty() {
            anyhow::bail!("CRAWLER_SERVICE_URL is empty");
        }

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            crawler,
        })
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crawler_config_strips_trailing_slash() {
        let config = CrawlerConfig::new("http://crawler:3001/ ");
        assert_eq!(config.service_url, "http://crawler:3001");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn crawler_config_defaults_to_local_service() {
        let config = CrawlerConfig::default();
        assert_eq!(config.service_url, "http://localhost:3001");
        assert_eq!(config.max_in_flight, 8);
    }
}
