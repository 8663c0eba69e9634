//! Source retrieval with a local file cache.
//!
//! A source is downloaded at most once: if its cache file exists, the network
//! is never touched (unless a refresh is requested). The HTTP side sits
//! behind [`Transport`] so the pipeline can run against stubs in tests.

mod error;
mod http;

pub use error::FetchError;
pub use http::CurlTransport;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::SourceDescriptor;
use crate::storage::PartFile;

/// Blocking whole-resource GET.
pub trait Transport {
    /// Stream the body of `url` into `sink` and return the number of bytes written.
    /// Non-2xx responses are errors.
    fn get(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError>;
}

/// Where a source ended up on disk and whether this call downloaded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub path: PathBuf,
    /// `Some(bytes)` if the file was fetched by this call, `None` on a cache hit.
    pub downloaded: Option<u64>,
}

/// Ensure `source` is present at `path`, downloading it if missing (or if `refresh`).
///
/// The parent directory of `path` is created if needed.
/// `on_download` runs right before the network request is made.
/// Presence is the only validity check: no freshness or checksum comparison.
pub fn ensure_local(
    source: &SourceDescriptor,
    path: &Path,
    transport: &dyn Transport,
    refresh: bool,
    on_download: &mut dyn FnMut(&SourceDescriptor),
) -> Result<LocalFile, FetchError> {
    if !refresh && path.is_file() {
        tracing::debug!(path = %path.display(), "cache hit, skipping download");
        return Ok(LocalFile {
            path: path.to_path_buf(),
            downloaded: None,
        });
    }

    if let Some(cache_dir) = path.parent() {
        fs::create_dir_all(cache_dir).map_err(|e| FetchError::storage(cache_dir, e))?;
    }

    on_download(source);
    tracing::info!(url = %source.url, path = %path.display(), "downloading source");

    let mut part = PartFile::create(path).map_err(|e| FetchError::storage(path, e))?;
    let bytes = transport.get(&source.url, &mut part)?;
    part.finalize().map_err(|e| FetchError::storage(path, e))?;

    tracing::info!(bytes, path = %path.display(), "download complete");
    Ok(LocalFile {
        path: path.to_path_buf(),
        downloaded: Some(bytes),
    })
}
