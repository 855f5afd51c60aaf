//! Crawler endpoints.
//!
//! POST /api/crawler/trigger/:platform - queue a crawl, answer 202 immediately
//! GET  /api/crawler/status            - last 10 runs from `crawler_logs`

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};

use crate::common::ApiResult;
use crate::domains::crawling::{self, CrawlAck, CrawlerLog};
use crate::server::app::AxumAppState;

pub async fn trigger_crawl_handler(
    Extension(state): Extension<AxumAppState>,
    Path(platform): Path<String>,
) -> ApiResult<(StatusCode, Json<CrawlAck>)> {
    let ack = state.server_deps.crawler.trigger(&platform)?;
    Ok((StatusCode::ACCEPTED, Json(ack)))
}

pub async fn crawler_status_handler(
    Extension(state): Extension<AxumAppState>,
) -> ApiResult<Json<Vec<CrawlerLog>>> {
    let logs = crawling::recent_runs(state.server_deps.store.as_ref()).await?;
    Ok(Json(logs))
}
