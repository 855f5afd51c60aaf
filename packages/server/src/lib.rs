// Web Novel Integration - API Core
//
// REST facade over the novel catalog database and the external crawler service.
// Reads are served straight from Postgres; crawl triggers are forwarded to the
// crawler in the background.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
