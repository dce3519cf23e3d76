//! Tracker construction

use crate::auth::get_github_auth;
use crate::error::Result;
use crate::platform::{GitHubService, IssueTracker};
use crate::types::RepoConfig;
use tracing::debug;

/// Create a GitHub-backed tracker, reading the token from the environment
pub fn create_tracker(config: &RepoConfig) -> Result<Box<dyn IssueTracker>> {
    let auth = get_github_auth()?;
    debug!(source = %auth.source, repo = %config, "creating GitHub tracker");
    let service = GitHubService::new(&auth.token, config.clone())?;
    Ok(Box::new(service))
}
