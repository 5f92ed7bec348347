//! OpenTofu release installation into the project-local cache
//!
//! ```text
//! ensure_installed()
//!     ↓
//! 1. {base}/.tofu/{version}/tofu exists? → AlreadyInstalled
//!     ↓ (missing)
//! 2. create {base}/.tofu/{version}/
//! 3. GET release zip → NamedTempFile in scratch dir
//! 4. extract into staging dir inside the cache dir
//! 5. chmod +x (non-Windows, best effort)
//! 6. move entries into the cache dir, binary last
//!     ↓
//! Installed (temp archive and staging dir removed on drop)
//! ```

pub mod download;
pub mod extract;

use crate::config::Config;
use crate::error::{Result, ShimError};
use crate::github::build_client;
use crate::paths;
use crate::platform::{Arch, Os};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Progress notices emitted during installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallEvent {
    DownloadStarted {
        version: String,
        os: Os,
        arch: Arch,
        url: Url,
    },
    Installed {
        version: String,
        cache_dir: PathBuf,
    },
}

/// Installation inputs
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Directory holding `.tofu/`
    pub base_dir: PathBuf,
    pub version: String,
    pub os: Os,
    pub arch: Arch,
    pub release_base_url: Url,
    /// Where the archive is downloaded before extraction
    pub scratch_dir: PathBuf,
    /// Optional progress notice callback
    pub notify: Option<fn(InstallEvent)>,
}

impl InstallOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_dir: config.base_dir.clone(),
            version: config.version.clone(),
            os: config.os,
            arch: config.arch,
            release_base_url: config.release_base_url.clone(),
            scratch_dir: config.scratch_dir.clone(),
            notify: None,
        }
    }

    pub fn with_notify(mut self, notify: fn(InstallEvent)) -> Self {
        self.notify = Some(notify);
        self
    }

    fn emit(&self, event: InstallEvent) {
        if let Some(callback) = self.notify {
            callback(event);
        }
    }
}

/// Result of [`ensure_installed`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Binary was already cached; nothing was downloaded
    AlreadyInstalled(PathBuf),
    /// Binary was downloaded and extracted during this call
    Installed(PathBuf),
}

impl InstallOutcome {
    pub fn binary_path(&self) -> &Path {
        match self {
            InstallOutcome::AlreadyInstalled(path) | InstallOutcome::Installed(path) => path,
        }
    }
}

/// Makes sure the requested OpenTofu binary is present in the cache
///
/// Only the existence of the binary is checked; a cache directory without
/// the binary is treated as missing and repopulated.
///
/// # Errors
///
/// - `DownloadFailed` if the release host answers with a non-success status
/// - `Network` if the request cannot be completed
/// - `ExtractionFailed` if the archive is corrupt, unwritable or lacks the binary
/// - `Io` for cache directory or scratch file failures
///
/// On error no binary is left at the canonical path.
pub fn ensure_installed(options: &InstallOptions) -> Result<InstallOutcome> {
    let cache_dir = paths::cache_dir(&options.base_dir, &options.version);
    let binary_path = paths::binary_path(&options.base_dir, &options.version, options.os);

    if binary_path.exists() {
        debug!("cache hit: {}", binary_path.display());
        return Ok(InstallOutcome::AlreadyInstalled(binary_path));
    }

    fs::create_dir_all(&cache_dir).map_err(|e| {
        ShimError::io(
            format!("create cache directory {}", cache_dir.display()),
            e,
        )
    })?;

    let url = paths::download_url(
        &options.release_base_url,
        &options.version,
        options.os,
        options.arch,
    )?;

    options.emit(InstallEvent::DownloadStarted {
        version: options.version.clone(),
        os: options.os,
        arch: options.arch,
        url: url.clone(),
    });

    let client = build_client().map_err(|e| ShimError::Network {
        url: url.clone(),
        source: e,
    })?;

    // Removed when dropped, on success and on every error path below
    let archive = download::download_to_temp(&client, &url, &options.scratch_dir)?;

    let archive_name = paths::archive_name(&options.version, options.os, options.arch);
    extract::install_archive(
        archive.path(),
        &archive_name,
        &cache_dir,
        paths::binary_name(options.os),
        options.os != Os::Windows,
    )?;

    info!("installed {}", binary_path.display());
    options.emit(InstallEvent::Installed {
        version: options.version.clone(),
        cache_dir,
    });

    Ok(InstallOutcome::Installed(binary_path))
}
