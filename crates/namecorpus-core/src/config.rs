use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model;

/// Errors found while loading or validating a [`CorpusConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("{0}")]
    InvalidUrl(String),
    #[error("cannot derive a cache filename from {0}; set `filename` explicitly")]
    NoFilename(String),
    #[error("cache filename {0:?} must be a plain file name")]
    InvalidFilename(String),
    #[error("cache filename {0:?} is used by more than one source")]
    DuplicateFilename(String),
    #[error("no sources configured")]
    NoSources,
    #[error("min_frequency must be a finite, non-negative number (got {0})")]
    InvalidThreshold(f64),
}

/// A local cache filename paired with the remote location it is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SourceEntry")]
pub struct SourceDescriptor {
    pub filename: String,
    pub url: String,
}

/// On-disk shape of a source; `filename` falls back to the URL's last path segment.
#[derive(Debug, Deserialize)]
struct SourceEntry {
    url: String,
    #[serde(default)]
    filename: Option<String>,
}

impl TryFrom<SourceEntry> for SourceDescriptor {
    type Error = ConfigError;

    fn try_from(entry: SourceEntry) -> Result<Self, Self::Error> {
        url_model::parse_source_url(&entry.url).map_err(ConfigError::InvalidUrl)?;
        let filename = match entry.filename {
            Some(name) => name,
            None => url_model::filename_from_url_path(&entry.url)
                .ok_or_else(|| ConfigError::NoFilename(entry.url.clone()))?,
        };
        Ok(SourceDescriptor {
            filename,
            url: entry.url,
        })
    }
}

impl SourceDescriptor {
    pub fn new(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            url: url.into(),
        }
    }
}

const SPANISH_NAMES_BASE: &str = "https://raw.githubusercontent.com/marcboquet/spanish-names/master";

/// Default minimum frequency for a name to be kept.
pub const DEFAULT_MIN_FREQUENCY: f64 = 1000.0;

/// Everything one pipeline run needs. Built once and never mutated while running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Rows with a frequency strictly below this are dropped.
    pub min_frequency: f64,
    /// Header of the column holding the name.
    pub name_column: String,
    /// Header of the column holding the frequency.
    pub frequency_column: String,
    /// Decimal separator used by the frequency column; replaced by '.' before parsing.
    pub decimal_separator: char,
    /// Directory holding downloaded CSVs. Doubles as the download cache.
    pub cache_dir: PathBuf,
    /// JSON file written at the end of the run. Its parent must already exist.
    pub output: PathBuf,
    /// Connect timeout for downloads, in seconds.
    pub connect_timeout_secs: u64,
    /// Remote CSV files to merge, in processing order.
    pub sources: Vec<SourceDescriptor>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            min_frequency: DEFAULT_MIN_FREQUENCY,
            name_column: "nombre".to_string(),
            frequency_column: "frec".to_string(),
            decimal_separator: ',',
            cache_dir: PathBuf::from("scripts"),
            output: PathBuf::from("src/data/names-es.json"),
            connect_timeout_secs: 30,
            sources: vec![
                SourceDescriptor::new("hombres.csv", format!("{SPANISH_NAMES_BASE}/hombres.csv")),
                SourceDescriptor::new("mujeres.csv", format!("{SPANISH_NAMES_BASE}/mujeres.csv")),
            ],
        }
    }
}

impl CorpusConfig {
    /// Local path a source is cached at.
    pub fn cache_path(&self, source: &SourceDescriptor) -> PathBuf {
        self.cache_dir.join(&source.filename)
    }

    /// Rejects configurations the pipeline cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.is_empty() {
            return Err(ConfigError::NoSources);
        }
        if !self.min_frequency.is_finite() || self.min_frequency < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.min_frequency));
        }
        let mut seen = HashSet::new();
        for source in &self.sources {
            url_model::parse_source_url(&source.url).map_err(ConfigError::InvalidUrl)?;
            if !url_model::is_plain_filename(&source.filename) {
                return Err(ConfigError::InvalidFilename(source.filename.clone()));
            }
            if !seen.insert(source.filename.as_str()) {
                return Err(ConfigError::DuplicateFilename(source.filename.clone()));
            }
        }
        Ok(())
    }

    /// Makes relative `cache_dir` and `output` relative to `base` instead of the working directory.
    pub fn rebase(mut self, base: &Path) -> Self {
        if self.cache_dir.is_relative() {
            self.cache_dir = base.join(&self.cache_dir);
        }
        if self.output.is_relative() {
            self.output = base.join(&self.output);
        }
        self
    }
}

/// Load and validate a TOML config. Relative paths inside it resolve against the file's directory.
pub fn load_from_path(path: &Path) -> Result<CorpusConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: CorpusConfig = toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let cfg = cfg.rebase(base);
    cfg.validate()?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
