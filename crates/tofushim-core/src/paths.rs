//! Cache layout and release URL construction
//!
//! Everything here is a pure function of its inputs: no filesystem or
//! network access.
//!
//! ```text
//! {base}/.tofu/{version}/tofu[.exe]
//! {release_base}/opentofu/opentofu/releases/download/v{version}/tofu_{version}_{os}_{arch}.zip
//! ```

use crate::error::Result;
use crate::github::add_path_segments;
use crate::platform::{Arch, Os};
use std::path::{Path, PathBuf};
use url::Url;

/// Cache directory name created under the base directory
pub const CACHE_DIR_NAME: &str = ".tofu";

const RELEASE_OWNER: &str = "opentofu";
const RELEASE_REPO: &str = "opentofu";

pub fn binary_name(os: Os) -> &'static str {
    match os {
        Os::Windows => "tofu.exe",
        Os::Darwin | Os::Linux => "tofu",
    }
}

/// `{base}/.tofu/{version}`
pub fn cache_dir(base_dir: &Path, version: &str) -> PathBuf {
    base_dir.join(CACHE_DIR_NAME).join(version)
}

/// `{base}/.tofu/{version}/{binary_name}`
pub fn binary_path(base_dir: &Path, version: &str, os: Os) -> PathBuf {
    cache_dir(base_dir, version).join(binary_name(os))
}

/// Release asset file name, e.g. `tofu_1.9.0_linux_amd64.zip`
pub fn archive_name(version: &str, os: Os, arch: Arch) -> String {
    format!("tofu_{version}_{os}_{arch}.zip")
}

/// Builds the release asset download URL under `release_base`
///
/// # Errors
///
/// Returns `ConfigInvalid` if `release_base` cannot be a base URL
pub fn download_url(release_base: &Url, version: &str, os: Os, arch: Arch) -> Result<Url> {
    let tag = format!("v{version}");
    let asset = archive_name(version, os, arch);

    let mut url = release_base.clone();
    add_path_segments(
        &mut url,
        &[
            RELEASE_OWNER,
            RELEASE_REPO,
            "releases",
            "download",
            &tag,
            &asset,
        ],
    )?;
    Ok(url)
}
