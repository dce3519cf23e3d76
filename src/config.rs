//! Runtime configuration
//!
//! Repository coordinates and flags come from the CLI (with environment
//! fallbacks). Label names can be overridden from an optional TOML file:
//!
//! ```toml
//! [labels]
//! in_progress = "status:in_progress"
//! has_pr = "status:has_pr"
//! completed = "status:completed"
//! ```

use crate::error::{Error, Result};
use crate::types::{RepoConfig, StatusLabel};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Concrete label strings for each status
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabelNames {
    /// Label for issues with a branch in progress
    pub in_progress: String,
    /// Label for issues with an open pull request
    pub has_pr: String,
    /// Label for issues closed by a release
    pub completed: String,
}

impl Default for LabelNames {
    fn default() -> Self {
        Self {
            in_progress: "status:in_progress".to_string(),
            has_pr: "status:has_pr".to_string(),
            completed: "status:completed".to_string(),
        }
    }
}

impl LabelNames {
    /// Label string for a status
    pub fn name(&self, label: StatusLabel) -> &str {
        match label {
            StatusLabel::InProgress => &self.in_progress,
            StatusLabel::HasPr => &self.has_pr,
            StatusLabel::Completed => &self.completed,
        }
    }
}

/// On-disk config file layout
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Label name overrides
    pub labels: LabelNames,
}

impl FileConfig {
    /// Parse a config file body
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("invalid config: {e}")))
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

        Self::parse(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }
}

/// Everything a sync run needs besides the tracker itself
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Target repository
    pub repo: RepoConfig,
    /// Label names
    pub labels: LabelNames,
    /// Plan label steps without calling mutation endpoints
    pub dry_run: bool,
}

impl SyncConfig {
    /// Config with default labels
    pub fn new(repo: RepoConfig) -> Self {
        Self {
            repo,
            labels: LabelNames::default(),
            dry_run: false,
        }
    }
}

/// Split an `owner/name` repository slug
pub fn parse_repository(slug: &str) -> Result<(String, String)> {
    match slug.trim().split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(Error::Config(format!(
            "invalid repository '{slug}', expected owner/name"
        ))),
    }
}
