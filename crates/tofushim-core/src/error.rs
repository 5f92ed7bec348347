use std::path::PathBuf;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ShimError {
    // Platform errors
    #[error("UNSUPPORTED_PLATFORM: unsupported architecture '{arch}'")]
    UnsupportedPlatform { arch: String },

    // Config errors
    #[error("CONFIG_INVALID_VALUE: {name}: {reason}")]
    ConfigInvalid { name: String, reason: String },

    // Network errors
    #[error("DOWNLOAD_FAILED: HTTP {status} from {url}")]
    DownloadFailed { status: u16, url: Url },

    #[error("NETWORK_FETCH_FAILED: {url}: {source}")]
    Network {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    // Install errors
    #[error("EXTRACTION_FAILED: {archive}: {reason}")]
    ExtractionFailed {
        archive: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Exec errors
    #[error("PROCESS_START_FAILED: could not start {}: {source}", path.display())]
    ProcessStartFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO_ERROR: {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl ShimError {
    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        ShimError::Io {
            operation: operation.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShimError>;
