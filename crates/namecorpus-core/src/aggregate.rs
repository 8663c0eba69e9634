//! Union of accepted names and the JSON output artifact.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::storage;

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to serialize names: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Deduplicated names in ascending code-point order.
///
/// Identity is exact string equality, so casing must already be normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSet {
    names: BTreeSet<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert every name, returning how many were new.
    pub fn extend<I>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.names.len();
        self.names.extend(names);
        self.names.len() - before
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn into_sorted(self) -> Vec<String> {
        self.names.into_iter().collect()
    }

    /// JSON array, 2-space indent, non-ASCII written literally, no trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.names)
    }
}

impl FromIterator<String> for NameSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Serialize `names` and replace `path` with it. The parent directory must already exist.
pub fn write_json(path: &Path, names: &NameSet) -> Result<(), WriteError> {
    let json = names.to_json()?;
    storage::write_atomic(path, json.as_bytes()).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(count = names.len(), path = %path.display(), "wrote names");
    Ok(())
}
