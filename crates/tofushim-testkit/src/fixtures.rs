//! In-memory zip fixtures shaped like OpenTofu release archives

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

/// Builds a zip archive from `(name, contents, unix_mode)` entries
///
/// Names ending in `/` become directory entries.
pub fn zip_with_entries(entries: &[(&str, &[u8], u32)]) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));

    for (name, contents, mode) in entries {
        let options = SimpleFileOptions::default().unix_permissions(*mode);
        if name.ends_with('/') {
            zip.add_directory(*name, options)
                .expect("Failed to add directory to zip");
        } else {
            zip.start_file(*name, options)
                .expect("Failed to start zip entry");
            zip.write_all(contents).expect("Failed to write zip entry");
        }
    }

    zip.finish()
        .expect("Failed to finish zip archive")
        .into_inner()
}

/// Builds a release-like archive: an executable `binary` plus extra files
///
/// # Examples
///
/// ```rust
/// use tofushim_testkit::release_zip;
///
/// let bytes = release_zip("tofu", b"#!/bin/sh\nexit 0\n", &[("LICENSE", b"MPL-2.0")]);
/// assert!(bytes.starts_with(b"PK"));
/// ```
pub fn release_zip(binary: &str, script: &[u8], extra: &[(&str, &[u8])]) -> Vec<u8> {
    let mut entries: Vec<(&str, &[u8], u32)> = vec![(binary, script, 0o755)];
    entries.extend(extra.iter().map(|(name, contents)| (*name, *contents, 0o644)));
    zip_with_entries(&entries)
}
