// Common types and utilities shared across the application

pub mod entity_ids;
pub mod errors;
pub mod id;
pub mod pagination;

pub use entity_ids::*;
pub use errors::{ApiError, ApiResult};
pub use id::Id;
pub use pagination::{PageParams, PageWindow};
