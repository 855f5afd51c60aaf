// Common test utilities
#![allow(dead_code)]

pub mod api;
pub mod crawler_stub;
pub mod fixtures;
pub mod harness;

pub use api::*;
pub use crawler_stub::*;
pub use fixtures::*;
pub use harness::*;
