//! CLI parse and config-resolution tests.

use super::Cli;
use clap::Parser;
use std::path::{Path, PathBuf};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_no_args() {
    let cli = parse(&["namecorpus"]);
    assert!(cli.config.is_none());
    assert!(cli.cache_dir.is_none());
    assert!(cli.output.is_none());
    assert!(!cli.refresh);
    assert!(!cli.verbose);
}

#[test]
fn cli_parse_all_flags() {
    let cli = parse(&[
        "namecorpus",
        "--config",
        "corpus.toml",
        "--cache-dir",
        "/tmp/raw",
        "-o",
        "out.json",
        "--refresh",
        "-v",
    ]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("corpus.toml")));
    assert_eq!(cli.cache_dir.as_deref(), Some(Path::new("/tmp/raw")));
    assert_eq!(cli.output.as_deref(), Some(Path::new("out.json")));
    assert!(cli.refresh);
    assert!(cli.verbose);
}

#[test]
fn cli_rejects_positional_args() {
    assert!(Cli::try_parse_from(["namecorpus", "extra"]).is_err());
}

#[test]
fn default_config_without_flags() {
    let cfg = parse(&["namecorpus"]).corpus_config().unwrap();
    assert_eq!(cfg.cache_dir, PathBuf::from("scripts"));
    assert_eq!(cfg.output, PathBuf::from("src/data/names-es.json"));
    assert_eq!(cfg.sources.len(), 2);
}

#[test]
fn flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corpus.toml");
    std::fs::write(
        &path,
        "min_frequency = 5\ncache_dir = \"raw\"\noutput = \"names.json\"\n",
    )
    .unwrap();
    let path_str = path.to_str().unwrap();

    let cfg = parse(&["namecorpus", "--config", path_str]).corpus_config().unwrap();
    assert_eq!(cfg.min_frequency, 5.0);
    assert_eq!(cfg.cache_dir, dir.path().join("raw"));
    assert_eq!(cfg.output, dir.path().join("names.json"));

    let cfg = parse(&["namecorpus", "--config", path_str, "--output", "elsewhere.json"])
        .corpus_config()
        .unwrap();
    assert_eq!(cfg.output, PathBuf::from("elsewhere.json"));
    assert_eq!(cfg.cache_dir, dir.path().join("raw"));
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let cli = parse(&["namecorpus", "--config", path.to_str().unwrap()]);
    assert!(cli.corpus_config().is_err());
}
