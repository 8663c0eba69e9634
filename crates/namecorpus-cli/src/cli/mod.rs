//! CLI for the namecorpus name-list builder.
//!
//! With no arguments it builds `src/data/names-es.json` from the two Spanish
//! name CSVs, caching downloads in `scripts/`.

mod build;

use anyhow::Result;
use clap::Parser;
use namecorpus_core::config::{self, CorpusConfig};
use std::path::PathBuf;

/// Build a JSON list of given names from remote frequency tables.
#[derive(Debug, Parser)]
#[command(name = "namecorpus")]
#[command(version, about = "Build a sorted JSON list of given names from remote CSV frequency tables", long_about = None)]
pub struct Cli {
    /// TOML file describing sources, columns and threshold (defaults to the Spanish corpus).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory where downloaded CSVs are cached.
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Output JSON file. Its parent directory must exist.
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Download every source again even if a cached copy exists.
    #[arg(long)]
    pub refresh: bool,

    /// Log per-source details.
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the effective configuration: file (or built-in default), then flag overrides.
    pub fn corpus_config(&self) -> Result<CorpusConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => CorpusConfig::default(),
        };
        if let Some(dir) = &self.cache_dir {
            cfg.cache_dir = dir.clone();
        }
        if let Some(out) = &self.output {
            cfg.output = out.clone();
        }
        tracing::debug!("effective config: {:?}", cfg);
        Ok(cfg)
    }

    pub fn run(self) -> Result<()> {
        let cfg = self.corpus_config()?;
        build::run_build(&cfg, self.refresh)
    }
}

#[cfg(test)]
mod tests;
