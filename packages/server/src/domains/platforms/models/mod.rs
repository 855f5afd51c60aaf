pub mod platform;

pub use platform::{NewPlatform, Platform};
