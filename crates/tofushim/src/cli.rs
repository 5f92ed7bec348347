//! Argument capture and progress notices
//!
//! tofushim defines no flags of its own besides `--tofu-version`, so it does
//! not go through an argument parser: `--help`, `--version` and everything
//! else must reach `tofu` untouched.

use colored::Colorize;
use std::ffi::OsString;
use tofushim_core::InstallEvent;

/// Collects the process arguments (without argv[0])
///
/// Arguments stay OS strings so bytes that are not UTF-8 still reach `tofu`.
pub fn collect_args() -> Vec<OsString> {
    std::env::args_os().skip(1).collect()
}

/// Prints install progress to stderr; stdout belongs to `tofu`
pub fn print_notice(event: InstallEvent) {
    match event {
        InstallEvent::DownloadStarted {
            version, os, arch, ..
        } => {
            eprintln!(
                "{} Downloading OpenTofu {} for {}/{}...",
                "↓".cyan().bold(),
                version,
                os,
                arch
            );
        }
        InstallEvent::Installed { version, cache_dir } => {
            eprintln!(
                "{} OpenTofu {} installed to {}",
                "✓".green().bold(),
                version,
                cache_dir.display()
            );
        }
    }
}
