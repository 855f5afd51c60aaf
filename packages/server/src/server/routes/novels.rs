//! Novel catalog endpoints.
//!
//! GET /api/novels?genre=&page=&size=
//! GET /api/novels/popular
//! GET /api/novels/platform/:platform?page=&size=
//! GET /api/novels/:id

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::common::{ApiError, ApiResult, NovelId, PageParams};
use crate::domains::novels::{Novel, NovelDetail, PlatformNovel};
use crate::server::app::AxumAppState;

#[derive(Debug, Default, Deserialize)]
pub struct NovelListQuery {
    genre: Option<String>,
    page: Option<i64>,
    size: Option<i64>,
}

pub async fn list_novels_handler(
    Extension(state): Extension<AxumAppState>,
    Query(query): Query<NovelListQuery>,
) -> ApiResult<Json<Vec<Novel>>> {
    let params = PageParams {
        page: query.page,
        size: query.size,
    };
    let novels = state
        .server_deps
        .catalog
        .list_novels(query.genre.as_deref(), &params)
        .await?;
    Ok(Json(novels))
}

/// Platform listing with genres attached.
///
/// Invalid paging is a 400. Any other failure answers `500` with an empty
/// JSON array; clients must read that as an error, not as "no novels".
pub async fn platform_novels_handler(
    Extension(state): Extension<AxumAppState>,
    Path(platform): Path<String>,
    Query(params): Query<PageParams>,
) -> Response {
    match state
        .server_deps
        .catalog
        .list_by_platform(&platform, &params)
        .await
    {
        Ok(novels) => Json(novels).into_response(),
        Err(e @ ApiError::BadRequest(_)) => e.into_response(),
        Err(e) => {
            tracing::error!(platform = %platform, error = %e, "Platform listing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Vec::<PlatformNovel>::new()),
            )
                .into_response()
        }
    }
}

pub async fn novel_detail_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<NovelId>,
) -> ApiResult<Json<NovelDetail>> {
    let detail = state.server_deps.catalog.get_detail(id).await?;
    Ok(Json(detail))
}

pub async fn popular_novels_handler(
    Extension(state): Extension<AxumAppState>,
) -> ApiResult<Json<Vec<Novel>>> {
    let novels = state.server_deps.catalog.list_popular().await?;
    Ok(Json(novels))
}
