//! One full run: fetch every source, filter it, merge, write the JSON array.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::aggregate::{self, NameSet};
use crate::config::{CorpusConfig, SourceDescriptor};
use crate::fetch::{self, Transport};
use crate::names::{self, FilterRules, FilterStats};

/// Per-run switches that are not part of the corpus definition.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Download sources even when a cached copy exists.
    pub refresh: bool,
}

/// What happened to one source during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceReport {
    pub filename: String,
    pub path: PathBuf,
    /// Bytes downloaded, `None` if the cached file was used.
    pub downloaded: Option<u64>,
    pub stats: FilterStats,
    /// Names from this source not already contributed by an earlier one.
    pub new_names: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub sources: Vec<SourceReport>,
    pub count: usize,
    pub output: PathBuf,
}

/// Fetch and filter every source, returning the merged set without writing anything.
///
/// Sources are processed in configuration order; each one's names are
/// title-cased before being merged.
pub fn collect(
    cfg: &CorpusConfig,
    transport: &dyn Transport,
    opts: RunOptions,
    on_download: &mut dyn FnMut(&SourceDescriptor),
) -> Result<(NameSet, Vec<SourceReport>)> {
    cfg.validate()?;
    let rules = FilterRules::from(cfg);
    let mut all = NameSet::new();
    let mut reports = Vec::with_capacity(cfg.sources.len());

    for source in &cfg.sources {
        let cache_path = cfg.cache_path(source);
        let local = fetch::ensure_local(source, &cache_path, transport, opts.refresh, on_download)
            .with_context(|| format!("fetching {}", source.url))?;
        let parsed = names::read_names(&local.path, &rules)?;
        let new_names = all.extend(parsed.names);
        tracing::debug!(source = %source.filename, new_names, total = all.len(), "merged source");
        reports.push(SourceReport {
            filename: source.filename.clone(),
            path: local.path,
            downloaded: local.downloaded,
            stats: parsed.stats,
            new_names,
        });
    }

    Ok((all, reports))
}

/// Run the whole pipeline and write `cfg.output`.
pub fn run(
    cfg: &CorpusConfig,
    transport: &dyn Transport,
    opts: RunOptions,
    on_download: &mut dyn FnMut(&SourceDescriptor),
) -> Result<RunSummary> {
    let (names, sources) = collect(cfg, transport, opts, on_download)?;
    aggregate::write_json(&cfg.output, &names)?;
    Ok(RunSummary {
        sources,
        count: names.len(),
        output: cfg.output.clone(),
    })
}
