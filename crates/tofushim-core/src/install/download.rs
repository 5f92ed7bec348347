//! Release archive download into a scratch file

use crate::error::{Result, ShimError};
use log::debug;
use reqwest::blocking::Client;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use url::Url;

/// Downloads `url` into a temporary file inside `scratch_dir`
///
/// A single GET is issued; there is no retry. The returned file is deleted
/// when dropped, so callers get cleanup on every exit path.
///
/// # Errors
///
/// - `Network` if the request cannot be sent
/// - `DownloadFailed` if the response status is not a success
/// - `Io` if the body cannot be streamed to disk
pub fn download_to_temp(client: &Client, url: &Url, scratch_dir: &Path) -> Result<NamedTempFile> {
    debug!("GET {url}");
    let mut response = client
        .get(url.as_str())
        .send()
        .map_err(|e| ShimError::Network {
            url: url.clone(),
            source: e.without_url(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ShimError::DownloadFailed {
            status: status.as_u16(),
            url: url.clone(),
        });
    }

    let mut temp_file = tempfile::Builder::new()
        .prefix("tofushim-")
        .suffix(".zip")
        .tempfile_in(scratch_dir)
        .map_err(|e| {
            ShimError::io(
                format!("create temporary file in {}", scratch_dir.display()),
                e,
            )
        })?;

    let written = io::copy(&mut response, &mut temp_file)
        .map_err(|e| ShimError::io(format!("read response body from {url}"), e))?;

    temp_file
        .flush()
        .and_then(|()| temp_file.as_file().sync_all())
        .map_err(|e| ShimError::io("sync temporary file", e))?;

    debug!("downloaded {written} bytes to {}", temp_file.path().display());
    Ok(temp_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::build_client;
    use mockito::Server;
    use std::fs;
    use tofushim_testkit::temp_dir_in_workspace;

    #[test]
    fn test_download_to_temp_writes_body() {
        let scratch = temp_dir_in_workspace();
        let mut server = Server::new();
        let body: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();
        let mock = server
            .mock("GET", "/asset.zip")
            .with_status(200)
            .with_body(body.clone())
            .create();

        let url = Url::parse(&format!("{}/asset.zip", server.url())).unwrap();
        let client = build_client().unwrap();
        let file = download_to_temp(&client, &url, scratch.path()).unwrap();

        mock.assert();
        assert!(file.path().starts_with(scratch.path()));
        assert_eq!(fs::read(file.path()).unwrap(), body);
    }

    #[test]
    fn test_download_to_temp_removed_on_drop() {
        let scratch = temp_dir_in_workspace();
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/asset.zip")
            .with_status(200)
            .with_body("zip")
            .create();

        let url = Url::parse(&format!("{}/asset.zip", server.url())).unwrap();
        let client = build_client().unwrap();
        let file = download_to_temp(&client, &url, scratch.path()).unwrap();
        let path = file.path().to_path_buf();
        assert!(path.exists());

        drop(file);
        assert!(!path.exists());
    }

    #[test]
    fn test_download_to_temp_non_success_status() {
        let scratch = temp_dir_in_workspace();
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/missing.zip")
            .with_status(500)
            .create();

        let url = Url::parse(&format!("{}/missing.zip", server.url())).unwrap();
        let client = build_client().unwrap();
        let err = download_to_temp(&client, &url, scratch.path()).unwrap_err();

        assert!(matches!(err, ShimError::DownloadFailed { status: 500, .. }));
        assert!(fs::read_dir(scratch.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_download_to_temp_network_error() {
        let scratch = temp_dir_in_workspace();
        let url = Url::parse("http://127.0.0.1:1/asset.zip").unwrap();
        let client = build_client().unwrap();
        let err = download_to_temp(&client, &url, scratch.path()).unwrap_err();
        assert!(matches!(err, ShimError::Network { .. }));
    }
}
