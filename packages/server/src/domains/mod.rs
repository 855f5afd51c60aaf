// Business domains
pub mod crawling;
pub mod novels;
pub mod platforms;
