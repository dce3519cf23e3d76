//! Shared command context
//!
//! Collects the setup a run needs before any flow starts: repository
//! coordinates, optional config file, token and tracker client.

use crate::cli::Cli;
use issue_status_sync::config::{FileConfig, SyncConfig, parse_repository};
use issue_status_sync::error::Result;
use issue_status_sync::event::TriggerEvent;
use issue_status_sync::platform::{IssueTracker, create_tracker};
use issue_status_sync::types::RepoConfig;
use tracing::debug;

/// Everything resolved from flags, environment and config file
pub struct CommandContext {
    /// The trigger being handled
    pub event: TriggerEvent,
    /// Repository, labels and dry-run flag
    pub config: SyncConfig,
    /// Issue tracker client
    pub tracker: Box<dyn IssueTracker>,
}

impl CommandContext {
    /// Resolve the context for a CLI invocation
    ///
    /// Fails on a malformed repository slug, an unreadable config file or
    /// a missing token.
    pub fn new(args: &Cli) -> Result<Self> {
        let (owner, repo) = parse_repository(&args.repository)?;
        let repo = RepoConfig::new(owner, repo).with_api_url(&args.api_url);

        let mut config = SyncConfig::new(repo);
        config.dry_run = args.dry_run;

        if let Some(path) = &args.config {
            debug!(path = %path.display(), "loading config file");
            config.labels = FileConfig::load(path)?.labels;
        }

        let tracker = create_tracker(&config.repo)?;
        let event = TriggerEvent::new(args.git_ref.as_str(), &args.event);

        Ok(Self {
            event,
            config,
            tracker,
        })
    }
}
