//! Platforms domain - registry of crawled source sites
pub mod models;

pub use models::{NewPlatform, Platform};

use tracing::info;

use crate::common::{ApiError, ApiResult};
use crate::kernel::BaseCatalogStore;

pub async fn list_platforms(store: &dyn BaseCatalogStore) -> ApiResult<Vec<Platform>> {
    Ok(store.all_platforms().await?)
}

/// Register a new platform. Names are unique; a duplicate is a conflict, never an update.
pub async fn register_platform(
    store: &dyn BaseCatalogStore,
    mut new: NewPlatform,
) -> ApiResult<Platform> {
    new.name = new.name.trim().to_string();
    if new.name.is_empty() {
        return Err(ApiError::BadRequest("platform name must not be empty".to_string()));
    }

    let platform = store
        .create_platform(&new)
        .await?
        .ok_or_else(|| ApiError::Conflict(format!("platform {} already exists", new.name)))?;

    info!(platform_id = %platform.id, name = %platform.name, "Platform registered");
    Ok(platform)
}
