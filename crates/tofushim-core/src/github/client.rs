//! HTTP client construction for release downloads

use reqwest::blocking::Client;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("tofushim/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for release downloads
///
/// The blocking client defaults to a 30 second timeout; release archives
/// are large, so the timeout is disabled and the download runs to completion.
///
/// # Errors
///
/// Returns error if the TLS backend cannot be initialised
pub fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None)
        .build()
}
