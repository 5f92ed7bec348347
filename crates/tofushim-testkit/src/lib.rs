//! Test utilities for tofushim
//!
//! This crate provides shared testing utilities used across the tofushim workspace.

pub mod fixtures;
pub mod mock;

pub use fixtures::{release_zip, zip_with_entries};
pub use mock::{mock_release, release_path};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// Cargo runs tests from the crate root, so every test scratch directory ends
/// up under `<crate>/.tmp/`, which is gitignored and easy to clean by hand.
///
/// # Panics
///
/// Panics if the current directory cannot be read or `.tmp/` cannot be created
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}
