//! Command line surface
//!
//! Every flag falls back to the variable GitHub Actions already exports, so
//! a workflow step needs no arguments.

mod context;
mod run;

pub use run::run_sync;

use clap::Parser;
use issue_status_sync::types::DEFAULT_API_URL;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sync issue status labels with branch and pull request events
#[derive(Parser, Debug)]
#[command(name = "issue-status", version)]
pub struct Cli {
    /// Triggering ref, e.g. refs/heads/issue/12-login or refs/pull/7/merge
    #[arg(long = "ref", env = "GITHUB_REF", value_name = "REF")]
    pub git_ref: String,

    /// Event that triggered the run (create, push, pull_request, ...)
    #[arg(long, env = "GITHUB_EVENT_NAME", default_value = "push")]
    pub event: String,

    /// Repository as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY", value_name = "OWNER/NAME")]
    pub repository: String,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// TOML file with label name overrides
    #[arg(long, env = "ISSUE_STATUS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log label changes without making them
    #[arg(
        long,
        env = "ISSUE_STATUS_DRY_RUN",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub dry_run: bool,
}

/// Install the stdout log subscriber (`RUST_LOG`, default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .init();
}
