//! Source URL checks and cache filename hints.

use url::Url;

/// Schemes the curl transport is expected to fetch from.
const SUPPORTED_SCHEMES: &[&str] = &["http", "https", "file"];

/// Parses `raw` and rejects schemes the fetcher does not handle.
pub fn parse_source_url(raw: &str) -> Result<Url, String> {
    let parsed = Url::parse(raw).map_err(|e| format!("invalid URL {raw:?}: {e}"))?;
    if !SUPPORTED_SCHEMES.contains(&parsed.scheme()) {
        return Err(format!(
            "unsupported URL scheme {:?} in {raw:?}",
            parsed.scheme()
        ));
    }
    Ok(parsed)
}

/// Extracts the last path segment from a URL for use as a cache filename.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// True if `name` can be used as a file directly inside the cache directory.
pub fn is_plain_filename(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
