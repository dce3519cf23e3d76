//! Issue tracker services
//!
//! The sync flows only talk to the tracker through [`IssueTracker`], so
//! tests can swap in a mock and GitHub Enterprise needs no special casing.

mod factory;
mod github;

pub use factory::create_tracker;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{Commit, LabelRemoval, PullRequest, RepoConfig};
use async_trait::async_trait;

/// Issue tracker operations used by the sync flows
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetch a pull request by number
    async fn get_pull_request(&self, number: u64) -> Result<PullRequest>;

    /// List commits reachable from a ref, most recent first
    async fn list_commits(&self, reference: &str) -> Result<Vec<Commit>>;

    /// Message of the most recent commit on a ref.
    ///
    /// Delegates to [`list_commits`]; `None` when the ref has no commits.
    ///
    /// [`list_commits`]: Self::list_commits
    async fn latest_commit_message(&self, reference: &str) -> Result<Option<String>> {
        let commits = self.list_commits(reference).await?;
        Ok(commits.into_iter().next().map(|c| c.message))
    }

    /// Add labels to an issue
    async fn add_labels(&self, issue: u64, labels: &[String]) -> Result<()>;

    /// Remove one label from an issue
    ///
    /// A label that is not on the issue is [`LabelRemoval::NotPresent`],
    /// not an error.
    async fn remove_label(&self, issue: u64, label: &str) -> Result<LabelRemoval>;

    /// Repository this tracker is bound to
    fn config(&self) -> &RepoConfig;
}
