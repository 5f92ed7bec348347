//! Mock release server helpers
//!
//! Each test owns its own `mockito::Server`; mockito hands out servers from
//! a pool, so tests run in parallel without sharing mocks.

use mockito::{Mock, ServerGuard};

/// URL path of a release asset, relative to the release base URL
pub fn release_path(version: &str, os: &str, arch: &str) -> String {
    format!("/opentofu/opentofu/releases/download/v{version}/tofu_{version}_{os}_{arch}.zip")
}

/// Serves `body` for the given release asset, expecting exactly `hits` requests
///
/// # Examples
///
/// ```no_run
/// use tofushim_testkit::{mock_release, release_zip};
///
/// let mut server = mockito::Server::new();
/// let mock = mock_release(&mut server, "1.9.0", "linux", "amd64", release_zip("tofu", b"", &[]), 1);
/// // ... run tofushim with TOFUSHIM_RELEASE_BASE_URL = server.url()
/// mock.assert();
/// ```
pub fn mock_release(
    server: &mut ServerGuard,
    version: &str,
    os: &str,
    arch: &str,
    body: Vec<u8>,
    hits: usize,
) -> Mock {
    server
        .mock("GET", release_path(version, os, arch).as_str())
        .with_status(200)
        .with_header("content-type", "application/zip")
        .with_body(body)
        .expect(hits)
        .create()
}
