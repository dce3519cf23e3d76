//! Shared test fixtures

#![allow(dead_code)]

pub mod mock_tracker;

pub use mock_tracker::{MockTracker, TrackerCall, make_pr};

use issue_status_sync::config::SyncConfig;
use issue_status_sync::types::RepoConfig;

/// Sync config for `test/repo` with default labels
pub fn test_config() -> SyncConfig {
    SyncConfig::new(RepoConfig::new("test", "repo"))
}

/// Same as [`test_config`] but in dry-run mode
pub fn dry_run_config() -> SyncConfig {
    let mut config = test_config();
    config.dry_run = true;
    config
}

/// `AddLabels` call for a single label
pub fn add(issue: u64, label: &str) -> TrackerCall {
    TrackerCall::AddLabels(issue, vec![label.to_string()])
}

/// `RemoveLabel` call
pub fn remove(issue: u64, label: &str) -> TrackerCall {
    TrackerCall::RemoveLabel(issue, label.to_string())
}
