// HTTP routes
pub mod crawler;
pub mod genres;
pub mod health;
pub mod novels;
pub mod platforms;

pub use crawler::*;
pub use genres::*;
pub use health::*;
pub use novels::*;
pub use platforms::*;
