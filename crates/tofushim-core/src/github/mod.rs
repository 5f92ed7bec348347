//! Shared GitHub interaction utilities
//!
//! - HTTP client construction with the tofushim user agent
//! - Safe URL construction helpers

pub mod client;
pub mod url;

// Re-exports for convenient access
pub use client::{USER_AGENT, build_client};
pub use self::url::{DEFAULT_RELEASE_BASE_URL, add_path_segments, release_base_url};
