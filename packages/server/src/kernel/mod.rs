//! Kernel module - server infrastructure and dependencies.

pub mod catalog_store;
pub mod deps;
pub mod task_queue;
pub mod test_dependencies;
pub mod traits;

pub use catalog_store::PostgresCatalogStore;
pub use deps::ServerDeps;
pub use task_queue::{BoundedTaskQueue, QueueFull};
pub use test_dependencies::{FailOn, MockCatalogStore};
pub use traits::*;
