//! URL construction helpers for GitHub release downloads

use crate::error::{Result, ShimError};
use url::Url;

/// Release host used unless `TOFUSHIM_RELEASE_BASE_URL` overrides it
pub const DEFAULT_RELEASE_BASE_URL: &str = "https://github.com";

/// Environment variable overriding the release host (mirrors, tests)
pub const RELEASE_BASE_URL_ENV: &str = "TOFUSHIM_RELEASE_BASE_URL";

/// Parses the release base URL, falling back to github.com when unset
///
/// # Errors
///
/// Returns `ConfigInvalid` if the value is not an absolute URL usable as a base
pub fn release_base_url(value: Option<&str>) -> Result<Url> {
    let raw = value.unwrap_or(DEFAULT_RELEASE_BASE_URL);
    let url = Url::parse(raw).map_err(|e| ShimError::ConfigInvalid {
        name: RELEASE_BASE_URL_ENV.to_string(),
        reason: format!("'{raw}': {e}"),
    })?;

    if url.cannot_be_a_base() {
        return Err(ShimError::ConfigInvalid {
            name: RELEASE_BASE_URL_ENV.to_string(),
            reason: format!("'{raw}' cannot be used as a base URL"),
        });
    }

    Ok(url)
}

/// Appends path segments to a URL, percent-encoding each one
///
/// Any existing path on `url` (e.g. a mirror prefix) is kept.
pub fn add_path_segments(url: &mut Url, segments: &[&str]) -> Result<()> {
    let url_for_error = url.to_string();
    url.path_segments_mut()
        .map_err(|_| ShimError::ConfigInvalid {
            name: RELEASE_BASE_URL_ENV.to_string(),
            reason: format!("'{url_for_error}' cannot be used as a base URL"),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(())
}
