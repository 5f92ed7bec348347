//! OpenTofu version pinning for tofushim.
//!
//! This crate resolves, downloads and launches a pinned OpenTofu release
//! from a project-local cache.
//!
//! # Architecture
//!
//! - [`args`]: Splits the `--tofu-version` override from forwarded arguments
//! - [`platform`]: Host OS and architecture tags
//! - [`paths`]: Cache layout and release URL construction (no I/O)
//! - [`config`]: Immutable per-run configuration
//! - [`github`]: HTTP client and URL helpers for release downloads
//! - [`install`]: Download and extraction into the cache
//! - [`exec`]: Child process launch with exit code relay
//!
//! # Run Flow
//!
//! ```text
//! Config::from_env(args)
//!     ↓
//! 1. split_args()        → version + forwarded args
//! 2. detect_os/arch()    → Os, Arch (UnsupportedPlatform aborts here)
//!     ↓
//! ensure_installed()
//!     → {base}/.tofu/{version}/tofu exists? done
//!     → otherwise GET release zip, extract, chmod +x
//!     ↓
//! exec::run()
//!     → inherit stdio, wait, relay exit code
//! ```
//!
//! # Example
//!
//! ```no_run
//! use tofushim_core::{Config, InstallOptions, ensure_installed, exec};
//!
//! # fn main() -> tofushim_core::Result<()> {
//! let config = Config::from_env(std::env::args_os().skip(1))?;
//! let outcome = ensure_installed(&InstallOptions::from_config(&config))?;
//! let code = exec::run(outcome.binary_path(), &config.forwarded_args)?;
//! std::process::exit(code);
//! # }
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod exec;
pub mod github;
pub mod install;
pub mod paths;
pub mod platform;

// Re-export commonly used types
pub use args::{DEFAULT_TOFU_VERSION, VERSION_FLAG, split_args};
pub use config::Config;
pub use error::{Result, ShimError};
pub use install::{InstallEvent, InstallOptions, InstallOutcome, ensure_installed};
pub use platform::{Arch, Os, detect_arch, detect_os};
