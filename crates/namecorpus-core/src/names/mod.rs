//! CSV reading and row filtering.
//!
//! Each row contributes a name and a frequency. A row is kept iff the trimmed
//! name is a single token and its frequency is at least the threshold; kept
//! names are title-cased. Malformed input aborts the whole read.

mod normalize;

pub use normalize::{is_single_token, parse_frequency, title_case};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::CorpusConfig;

/// Error from reading a source CSV. `origin` is the file path (or a label for in-memory input).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("{origin}: {source}")]
    Io {
        origin: String,
        source: std::io::Error,
    },
    #[error("{origin}: malformed CSV: {source}")]
    Csv { origin: String, source: csv::Error },
    #[error("{origin}: header has no {column:?} column")]
    MissingColumn { origin: String, column: String },
    #[error("{origin}, line {line}: row has no {column:?} field")]
    MissingField {
        origin: String,
        line: u64,
        column: String,
    },
    #[error("{origin}, line {line}: frequency {value:?} is not a number")]
    InvalidFrequency {
        origin: String,
        line: u64,
        value: String,
    },
}

/// Column names and thresholds applied to every row.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRules {
    pub name_column: String,
    pub frequency_column: String,
    pub decimal_separator: char,
    pub min_frequency: f64,
}

impl From<&CorpusConfig> for FilterRules {
    fn from(cfg: &CorpusConfig) -> Self {
        Self {
            name_column: cfg.name_column.clone(),
            frequency_column: cfg.frequency_column.clone(),
            decimal_separator: cfg.decimal_separator,
            min_frequency: cfg.min_frequency,
        }
    }
}

impl Default for FilterRules {
    fn default() -> Self {
        Self::from(&CorpusConfig::default())
    }
}

/// Outcome for a single row.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accepted(String),
    MultiToken,
    BelowThreshold,
}

impl FilterRules {
    /// Apply the filters to one row's raw fields. `None` if the frequency does not parse.
    pub fn judge(&self, raw_name: &str, raw_frequency: &str) -> Option<Verdict> {
        let name = raw_name.trim();
        let frequency = parse_frequency(raw_frequency, self.decimal_separator)?;
        Some(if !is_single_token(name) {
            Verdict::MultiToken
        } else if frequency < self.min_frequency {
            Verdict::BelowThreshold
        } else {
            Verdict::Accepted(title_case(name))
        })
    }
}

/// Per-source counters, logged after each read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub rows: usize,
    pub accepted: usize,
    pub multi_token: usize,
    pub below_threshold: usize,
}

/// Accepted names in file order (duplicates kept) plus counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceNames {
    pub names: Vec<String>,
    pub stats: FilterStats,
}

/// Read the CSV at `path` and return its accepted names in file order.
pub fn read_names(path: &Path, rules: &FilterRules) -> Result<SourceNames, ParseError> {
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| ParseError::Io {
        origin: origin.clone(),
        source,
    })?;
    let parsed = read_names_from(file, rules, &origin)?;
    tracing::info!(
        source = %origin,
        rows = parsed.stats.rows,
        accepted = parsed.stats.accepted,
        multi_token = parsed.stats.multi_token,
        below_threshold = parsed.stats.below_threshold,
        "filtered source"
    );
    Ok(parsed)
}

/// Same as [`read_names`] over any reader; `origin` labels errors.
pub fn read_names_from<R: Read>(
    input: R,
    rules: &FilterRules,
    origin: &str,
) -> Result<SourceNames, ParseError> {
    let csv_err = |source: csv::Error| ParseError::Csv {
        origin: origin.to_string(),
        source,
    };

    // Extra trailing fields are ignored; a row too short to reach a needed column is an error.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    let headers = reader.headers().map_err(csv_err)?.clone();
    let name_idx = column_index(&headers, &rules.name_column, origin)?;
    let freq_idx = column_index(&headers, &rules.frequency_column, origin)?;

    let mut out = SourceNames::default();
    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record).map_err(csv_err)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let missing = |column: &str| ParseError::MissingField {
            origin: origin.to_string(),
            line,
            column: column.to_string(),
        };
        let raw_name = record
            .get(name_idx)
            .ok_or_else(|| missing(&rules.name_column))?;
        let raw_freq = record
            .get(freq_idx)
            .ok_or_else(|| missing(&rules.frequency_column))?;

        out.stats.rows += 1;
        let verdict = rules
            .judge(raw_name, raw_freq)
            .ok_or_else(|| ParseError::InvalidFrequency {
                origin: origin.to_string(),
                line,
                value: raw_freq.to_string(),
            })?;
        match verdict {
            Verdict::Accepted(name) => {
                out.stats.accepted += 1;
                out.names.push(name);
            }
            Verdict::MultiToken => out.stats.multi_token += 1,
            Verdict::BelowThreshold => out.stats.below_threshold += 1,
        }
    }
    Ok(out)
}

fn column_index(headers: &csv::StringRecord, column: &str, origin: &str) -> Result<usize, ParseError> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == column)
        .ok_or_else(|| ParseError::MissingColumn {
            origin: origin.to_string(),
            column: column.to_string(),
        })
}
