use axum::{extract::Extension, Json};

use crate::common::ApiResult;
use crate::domains::novels::Genre;
use crate::server::app::AxumAppState;

/// GET /api/genres
pub async fn list_genres_handler(
    Extension(state): Extension<AxumAppState>,
) -> ApiResult<Json<Vec<Genre>>> {
    let genres = state.server_deps.catalog.list_genres().await?;
    Ok(Json(genres))
}
