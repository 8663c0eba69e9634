//! Logging init: structured `tracing` output on stderr.
//!
//! Stdout is reserved for the user-facing progress lines printed by the CLI,
//! so log records never interleave with them.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn,namecorpus=info";
/// Filter used when `RUST_LOG` is unset and verbose output was requested.
pub const VERBOSE_FILTER: &str = "info,namecorpus=debug";

/// Builds the env filter: `RUST_LOG` wins, otherwise the default for the verbosity.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber writing to stderr.
/// Fails if a subscriber is already installed (e.g. called twice).
pub fn init_logging(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    tracing::debug!(verbose, "logging initialized");
    Ok(())
}
