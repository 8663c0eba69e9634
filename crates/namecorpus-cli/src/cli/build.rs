//! Default action: fetch, filter, merge, write.

use anyhow::Result;
use namecorpus_core::config::CorpusConfig;
use namecorpus_core::fetch::CurlTransport;
use namecorpus_core::pipeline::{self, RunOptions};
use std::time::Duration;

pub fn run_build(cfg: &CorpusConfig, refresh: bool) -> Result<()> {
    let transport = CurlTransport::new(Duration::from_secs(cfg.connect_timeout_secs));
    let summary = pipeline::run(cfg, &transport, RunOptions { refresh }, &mut |source| {
        println!("Downloading {}", source.url);
    })?;

    for source in &summary.sources {
        tracing::debug!(
            file = %source.filename,
            rows = source.stats.rows,
            accepted = source.stats.accepted,
            new_names = source.new_names,
            "source summary"
        );
    }
    println!("Wrote {} names to {}", summary.count, summary.output.display());
    Ok(())
}
