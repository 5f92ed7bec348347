//! Per-run configuration
//!
//! Process-wide state (arguments, working directory, environment, temp dir)
//! is read once here and passed explicitly to every later step.

use crate::args::{VERSION_FLAG, split_args};
use crate::error::{Result, ShimError};
use crate::github::url::{RELEASE_BASE_URL_ENV, release_base_url};
use crate::platform::{Arch, Os, detect_arch, detect_os};
use std::ffi::OsString;
use std::path::PathBuf;
use url::Url;

/// Resolved configuration for a single tofushim run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// OpenTofu version to run; always a single path segment
    pub version: String,
    pub os: Os,
    pub arch: Arch,
    /// Arguments passed to `tofu` unchanged
    pub forwarded_args: Vec<OsString>,
    /// Directory holding `.tofu/` (the working directory at startup)
    pub base_dir: PathBuf,
    /// Host serving `/opentofu/opentofu/releases/download/...`
    pub release_base_url: Url,
    /// Where the downloaded archive is written before extraction
    pub scratch_dir: PathBuf,
}

impl Config {
    /// Builds the configuration from raw arguments and the host environment
    ///
    /// # Errors
    ///
    /// - `UnsupportedPlatform` if the CPU architecture has no OpenTofu release
    /// - `Io` if the working directory cannot be read
    /// - `ConfigInvalid` if `TOFUSHIM_RELEASE_BASE_URL` is not a usable URL
    ///   or the requested version cannot name a cache directory
    pub fn from_env<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let os = detect_os();
        let arch = detect_arch()?;

        let base_dir = std::env::current_dir()
            .map_err(|e| ShimError::io("read current directory", e))?;

        let base_url_override = std::env::var(RELEASE_BASE_URL_ENV).ok();
        let release_base_url = release_base_url(base_url_override.as_deref())?;

        Self::new(
            args,
            os,
            arch,
            base_dir,
            release_base_url,
            std::env::temp_dir(),
        )
    }

    /// Builds the configuration from explicit inputs
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the version is not valid UTF-8 or is not
    /// usable as a single directory name
    pub fn new<I, S>(
        args: I,
        os: Os,
        arch: Arch,
        base_dir: PathBuf,
        release_base_url: Url,
        scratch_dir: PathBuf,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let (version, forwarded_args) = split_args(args);
        Ok(Self {
            version: checked_version(version)?,
            os,
            arch,
            forwarded_args,
            base_dir,
            release_base_url,
            scratch_dir,
        })
    }
}

/// Accepts versions that map to exactly one directory under `.tofu/`
///
/// Distinct accepted versions always give distinct cache paths.
fn checked_version(raw: OsString) -> Result<String> {
    let invalid = |reason: String| ShimError::ConfigInvalid {
        name: VERSION_FLAG.to_string(),
        reason,
    };

    let version = raw
        .into_string()
        .map_err(|raw| invalid(format!("'{}' is not valid UTF-8", raw.to_string_lossy())))?;

    if version.is_empty() {
        return Err(invalid("version is empty".to_string()));
    }
    if version == "." || version == ".." || version.contains(['/', '\\']) {
        return Err(invalid(format!("'{version}' is not a valid version directory name")));
    }

    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::DEFAULT_TOFU_VERSION;

    fn build(args: &[&str]) -> Result<Config> {
        Config::new(
            args.iter().copied(),
            Os::Linux,
            Arch::Amd64,
            PathBuf::from("/projects/myapp"),
            release_base_url(None).unwrap(),
            PathBuf::from("/tmp"),
        )
    }

    fn sample(args: &[&str]) -> Config {
        build(args).unwrap()
    }

    fn assert_rejected_version(version: &str) {
        match build(&["--tofu-version", version, "plan"]) {
            Err(ShimError::ConfigInvalid { name, .. }) => assert_eq!(name, "--tofu-version"),
            other => panic!("expected ConfigInvalid for {version:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_new_splits_arguments() {
        let config = sample(&["apply", "--tofu-version", "1.7.0", "-auto-approve"]);
        assert_eq!(config.version, "1.7.0");
        assert_eq!(config.forwarded_args, vec!["apply", "-auto-approve"]);
    }

    #[test]
    fn test_new_defaults_version() {
        let config = sample(&["plan"]);
        assert_eq!(config.version, DEFAULT_TOFU_VERSION);
        assert_eq!(config.forwarded_args, vec!["plan"]);
    }

    #[test]
    fn test_new_accepts_prerelease_versions() {
        let config = sample(&["--tofu-version", "1.10.0-rc1"]);
        assert_eq!(config.version, "1.10.0-rc1");
    }

    #[test]
    fn test_new_rejects_empty_version() {
        assert_rejected_version("");
    }

    #[test]
    fn test_new_rejects_dot_versions() {
        assert_rejected_version(".");
        assert_rejected_version("..");
    }

    #[test]
    fn test_new_rejects_versions_with_separators() {
        assert_rejected_version("1.9.0/.");
        assert_rejected_version("../1.9.0");
        assert_rejected_version("1.9.0\\..");
    }

    #[test]
    #[cfg(unix)]
    fn test_new_rejects_non_utf8_version() {
        use std::os::unix::ffi::OsStringExt;

        let args = [
            OsString::from("--tofu-version"),
            OsString::from_vec(vec![b'1', 0xff]),
        ];
        let err = Config::new(
            args,
            Os::Linux,
            Arch::Amd64,
            PathBuf::from("/projects/myapp"),
            release_base_url(None).unwrap(),
            PathBuf::from("/tmp"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    #[cfg(unix)]
    fn test_new_forwards_non_utf8_arguments() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"-var-file=\xff.tfvars".to_vec());
        let config = Config::new(
            [OsString::from("plan"), raw.clone()],
            Os::Linux,
            Arch::Amd64,
            PathBuf::from("/projects/myapp"),
            release_base_url(None).unwrap(),
            PathBuf::from("/tmp"),
        )
        .unwrap();
        assert_eq!(config.forwarded_args, vec![OsString::from("plan"), raw]);
    }

    #[test]
    fn test_from_env_uses_current_directory() {
        let config = Config::from_env(["version"]).unwrap();
        assert_eq!(config.base_dir, std::env::current_dir().unwrap());
        assert_eq!(config.os, detect_os());
        assert_eq!(config.forwarded_args, vec!["version"]);
    }
}
