//! Fire-and-forget dispatch of crawl triggers to the crawler service.
//!
//! `trigger` returns as soon as the POST has been handed to the background
//! queue. The caller never sees the crawler's answer; success and failure are
//! only logged. Triggers beyond the configured in-flight capacity are refused
//! with `UpstreamUnavailable` instead of being queued.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::common::{ApiError, ApiResult};
use crate::config::CrawlerConfig;
use crate::kernel::BoundedTaskQueue;

/// Acknowledgment returned once a trigger has been queued
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrawlAck {
    pub message: String,
    pub platform: String,
}

#[derive(Debug, Clone)]
pub struct CrawlDispatcher {
    client: reqwest::Client,
    service_url: String,
    queue: BoundedTaskQueue,
}

impl CrawlDispatcher {
    /// Build a dispatcher with its own HTTP client.
    ///
    /// Connect and total request time are both bounded by `config.timeout`.
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .context("Failed to build crawler HTTP client")?;

        Ok(Self {
            client,
            service_url: config.service_url.trim_end_matches('/').to_string(),
            queue: BoundedTaskQueue::new(config.max_in_flight),
        })
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Triggers currently waiting on the crawler service.
    pub fn in_flight(&self) -> usize {
        self.queue.in_flight()
    }

    /// `<service_url>/crawl/<platform>`, with the platform as a single path segment
    pub fn trigger_url(&self, platform: &str) -> String {
        format!("{}/crawl/{}", self.service_url, urlencoding::encode(platform))
    }

    /// Queue a crawl trigger for `platform` and acknowledge immediately.
    pub fn trigger(&self, platform: &str) -> ApiResult<CrawlAck> {
        let platform = platform.trim();
        if platform.is_empty() {
            return Err(ApiError::BadRequest("platform must not be empty".to_string()));
        }

        let url = self.trigger_url(platform);
        info!(platform = %platform, url = %url, "Crawl trigger received");

        let client = self.client.clone();
        let task_platform = platform.to_string();
        let task_url = url.clone();

        self.queue
            .try_spawn(async move {
                post_trigger(client, task_platform, task_url).await;
            })
            .map_err(|e| {
                warn!(platform = %platform, error = %e, "Crawl trigger rejected");
                ApiError::UpstreamUnavailable(format!(
                    "too many crawl requests in flight, try again later ({})",
                    e
                ))
            })?;

        Ok(CrawlAck {
            message: format!(
                "Crawl request for {} has been sent. Check /api/crawler/status for progress.",
                platform
            ),
            platform: platform.to_string(),
        })
    }
}

async fn post_trigger(client: reqwest::Client, platform: String, url: String) {
    match client.post(&url).send().await {
        Ok(response) if response.status().is_success() => {
            info!(
                platform = %platform,
                status = %response.status(),
                "Crawler service accepted trigger"
            );
        }
        Ok(response) => {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(
                platform = %platform,
                status = %status,
                body = %body,
                "Crawler service rejected trigger"
            );
        }
        Err(e) => {
            error!(platform = %platform, url = %url, error = %e, "Crawler service call failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher(url: &str) -> CrawlDispatcher {
        CrawlDispatcher::new(&CrawlerConfig::new(url)).unwrap()
    }

    #[test]
    fn builds_trigger_url_from_base() {
        let dispatcher = dispatcher("http://localhost:3001/");
        assert_eq!(
            dispatcher.trigger_url("naver"),
            "http://localhost:3001/crawl/naver"
        );
    }

    #[test]
    fn encodes_platform_as_one_segment() {
        let dispatcher = dispatcher("http://crawler");
        assert_eq!(
            dispatcher.trigger_url("a/b c"),
            "http://crawler/crawl/a%2Fb%20c"
        );
    }

    #[tokio::test]
    async fn blank_platform_is_a_bad_request() {
        let dispatcher = dispatcher("http://127.0.0.1:9");
        let err = dispatcher.trigger("  ").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
