//! Fetch error type.

use std::io;
use std::path::{Path, PathBuf};

/// Error from retrieving a source. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connection, TLS, timeout, ...).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: ::curl::Error,
    },
    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    /// The response body could not be written to the destination.
    #[error("writing body of {url} failed: {source}")]
    Sink {
        url: String,
        #[source]
        source: io::Error,
    },
    /// Creating, syncing or renaming the cache file failed.
    #[error("cache file {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    pub(crate) fn storage(path: &Path, source: io::Error) -> Self {
        FetchError::Storage {
            path: path.to_path_buf(),
            source,
        }
    }
}
