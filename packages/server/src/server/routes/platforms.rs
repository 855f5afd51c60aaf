use axum::{extract::Extension, Json};

use crate::common::ApiResult;
use crate::domains::platforms::{self, NewPlatform, Platform};
use crate::server::app::AxumAppState;

/// GET /api/platforms
pub async fn list_platforms_handler(
    Extension(state): Extension<AxumAppState>,
) -> ApiResult<Json<Vec<Platform>>> {
    let all = platforms::list_platforms(state.server_deps.store.as_ref()).await?;
    Ok(Json(all))
}

/// POST /api/platforms
pub async fn create_platform_handler(
    Extension(state): Extension<AxumAppState>,
    Json(new): Json<NewPlatform>,
) -> ApiResult<Json<Platform>> {
    let platform = platforms::register_platform(state.server_deps.store.as_ref(), new).await?;
    Ok(Json(platform))
}

/// GET /api/platforms/test
pub async fn platform_connection_test_handler(
    Extension(state): Extension<AxumAppState>,
) -> ApiResult<&'static str> {
    state.server_deps.store.ping().await?;
    Ok("Database connection is working!")
}
