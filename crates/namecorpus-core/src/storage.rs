//! File lifecycle for downloads and the output artifact.
//!
//! Everything is written to a `.part` sibling first and atomically renamed
//! into place on success, so an aborted run never leaves a truncated file
//! behind at the final path.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `hombres.csv` → `hombres.csv.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// A file being written under its `.part` name.
///
/// Dropping it without calling [`PartFile::finalize`] removes the temp file.
pub struct PartFile {
    file: Option<File>,
    temp_path: PathBuf,
    final_path: PathBuf,
}

impl PartFile {
    /// Create (or truncate) the temp file for `final_path`. The parent directory must exist.
    pub fn create(final_path: &Path) -> io::Result<Self> {
        let temp_path = temp_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        Ok(PartFile {
            file: Some(file),
            temp_path,
            final_path: final_path.to_path_buf(),
        })
    }

    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Sync and rename the temp file over the final path, replacing any existing file.
    /// On failure the temp file is removed and the final path is left untouched.
    pub fn finalize(mut self) -> io::Result<PathBuf> {
        let committed = match self.file.take() {
            Some(file) => file.sync_all(),
            None => Ok(()),
        }
        .and_then(|()| fs::rename(&self.temp_path, &self.final_path));
        if let Err(e) = committed {
            let _ = fs::remove_file(&self.temp_path);
            return Err(e);
        }
        Ok(std::mem::take(&mut self.final_path))
    }
}

impl Write for PartFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.file.as_mut() {
            Some(f) => f.write(buf),
            None => Err(io::Error::new(io::ErrorKind::Other, "part file already closed")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for PartFile {
    fn drop(&mut self) {
        // Only an unfinalized writer still owns its handle.
        if self.file.take().is_some() {
            if let Err(e) = fs::remove_file(&self.temp_path) {
                tracing::warn!("could not remove {}: {}", self.temp_path.display(), e);
            }
        }
    }
}

/// Write `data` to `final_path` through a `.part` file.
pub fn write_atomic(final_path: &Path, data: &[u8]) -> io::Result<()> {
    let mut part = PartFile::create(final_path)?;
    part.write_all(data)?;
    part.finalize()?;
    Ok(())
}
