//! Zip extraction into the version cache directory
//!
//! The archive is unpacked into a staging directory inside the cache
//! directory (same filesystem), then each top-level entry is renamed into
//! place. The binary is renamed last, so it only shows up at its canonical
//! path once the rest of the release is in place.

use crate::error::{Result, ShimError};
use log::{debug, warn};
use std::error::Error;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extracts `archive_path` into `cache_dir`, overwriting existing entries
///
/// # Arguments
///
/// * `archive_path` - Downloaded zip file
/// * `archive_name` - Asset name, used in error messages
/// * `cache_dir` - Version cache directory (must exist)
/// * `binary_name` - File expected at the archive root
/// * `make_executable` - Add the executable bits to the binary (best effort)
///
/// # Errors
///
/// Returns `ExtractionFailed` if the archive cannot be read, an entry cannot
/// be written, or the archive has no `binary_name` at its root
pub fn install_archive(
    archive_path: &Path,
    archive_name: &str,
    cache_dir: &Path,
    binary_name: &str,
    make_executable: bool,
) -> Result<()> {
    let failed = |err: StepError| ShimError::ExtractionFailed {
        archive: archive_name.to_string(),
        reason: format!("{}: {}", err.operation, err.source),
        source: Some(err.source),
    };

    let staging = tempfile::Builder::new()
        .prefix(".staging-")
        .tempdir_in(cache_dir)
        .map_err(step("create staging directory".to_string()))
        .map_err(failed)?;

    let count = extract_zip(archive_path, staging.path()).map_err(failed)?;
    debug!("extracted {count} entries into {}", staging.path().display());

    let staged_binary = staging.path().join(binary_name);
    if !staged_binary.is_file() {
        return Err(ShimError::ExtractionFailed {
            archive: archive_name.to_string(),
            reason: format!("archive does not contain {binary_name}"),
            source: None,
        });
    }

    if make_executable {
        mark_executable(&staged_binary);
    }

    let entries = list_dir(staging.path())
        .map_err(step("read staging directory".to_string()))
        .map_err(failed)?;
    for name in entries.iter().filter(|name| name.as_os_str() != OsStr::new(binary_name)) {
        promote(&staging.path().join(name), &cache_dir.join(name)).map_err(failed)?;
    }
    promote(&staged_binary, &cache_dir.join(binary_name)).map_err(failed)?;

    // `staging` is removed on drop
    Ok(())
}

/// A failed extraction step and its underlying cause
#[derive(Debug)]
struct StepError {
    operation: String,
    source: Box<dyn Error + Send + Sync>,
}

type StepResult<T> = std::result::Result<T, StepError>;

fn step<E>(operation: String) -> impl FnOnce(E) -> StepError
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    move |e| StepError {
        operation,
        source: e.into(),
    }
}

/// Unpacks every safely named entry of a zip archive into `dest_dir`
///
/// Entries whose names escape `dest_dir` (absolute paths, `..`) are skipped.
fn extract_zip(archive_path: &Path, dest_dir: &Path) -> StepResult<usize> {
    let file = fs::File::open(archive_path)
        .map_err(step(format!("open {}", archive_path.display())))?;
    let mut archive = zip::ZipArchive::new(file).map_err(step("read zip archive".to_string()))?;

    let mut count = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(step(format!("read zip entry {i}")))?;

        let outpath = match entry.enclosed_name() {
            Some(path) => dest_dir.join(path),
            None => {
                warn!("skipping unsafe archive entry {}", entry.name());
                continue;
            }
        };

        if entry.is_dir() {
            fs::create_dir_all(&outpath)
                .map_err(step(format!("create directory {}", outpath.display())))?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent)
                .map_err(step(format!("create directory {}", parent.display())))?;
        }

        let mut outfile =
            fs::File::create(&outpath).map_err(step(format!("create {}", outpath.display())))?;
        io::copy(&mut entry, &mut outfile).map_err(step(format!("write {}", outpath.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&outpath, fs::Permissions::from_mode(mode & 0o777))
                    .map_err(step(format!("set permissions on {}", outpath.display())))?;
            }
        }

        count += 1;
    }

    Ok(count)
}

fn list_dir(dir: &Path) -> io::Result<Vec<PathBuf>> {
    fs::read_dir(dir)?
        .map(|entry| entry.map(|e| PathBuf::from(e.file_name())))
        .collect()
}

/// Renames `from` to `to`, replacing whatever is at `to`
///
/// Directories present on both sides are merged entry by entry, so files
/// the archive does not mention are left alone.
fn promote(from: &Path, to: &Path) -> StepResult<()> {
    let from_is_dir = fs::symlink_metadata(from)
        .map_err(step(format!("inspect {}", from.display())))?
        .is_dir();

    match fs::symlink_metadata(to) {
        Ok(meta) if meta.is_dir() && from_is_dir => {
            let children = list_dir(from).map_err(step(format!("read {}", from.display())))?;
            for name in &children {
                promote(&from.join(name), &to.join(name))?;
            }
            return Ok(());
        }
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(to),
        Ok(_) => fs::remove_file(to),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
    .map_err(step(format!("replace {}", to.display())))?;

    fs::rename(from, to).map_err(step(format!("move into {}", to.display())))
}

/// Adds the executable bits; the launch reports the problem if this fails
fn mark_executable(path: &Path) {
    #[cfg(unix)]
    {
        if let Err(e) = set_executable_permissions(path) {
            warn!("could not mark {} executable: {e}", path.display());
        }
    }

    #[cfg(not(unix))]
    let _ = path;
}

#[cfg(unix)]
fn set_executable_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)?.permissions();
    let mode = permissions.mode();
    permissions.set_mode(mode | 0o111);
    fs::set_permissions(path, permissions)
}
