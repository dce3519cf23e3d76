//! Core types for issue-status-sync

use serde::{Deserialize, Serialize};

/// Default GitHub REST API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// A pull request, reduced to what the hook looks at
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Head (source) branch name
    pub head_ref: String,
}

/// A commit from a branch listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commit {
    /// Full commit message
    pub message: String,
}

/// Repository the hook runs against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// REST API base URL, without a trailing slash
    pub api_url: String,
}

impl RepoConfig {
    /// Build a config for github.com
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Use a different API base URL (GitHub Enterprise, test servers)
    #[must_use]
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    /// Whether the API base is the public github.com endpoint
    pub fn is_default_api(&self) -> bool {
        self.api_url == DEFAULT_API_URL
    }
}

impl std::fmt::Display for RepoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Workflow status encoded as an issue label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusLabel {
    /// An issue branch exists
    InProgress,
    /// A pull request is open from the issue branch
    HasPr,
    /// A release branch carries the closing commit
    Completed,
}

impl std::fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "in_progress"),
            Self::HasPr => write!(f, "has_pr"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// What happened when asking the tracker to remove a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRemoval {
    /// The label was on the issue and is now gone
    Removed,
    /// The label was not on the issue (or the issue does not exist)
    NotPresent,
}
