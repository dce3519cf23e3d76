//! GitHub issue tracker implementation

use crate::error::{Error, Result};
use crate::platform::IssueTracker;
use crate::types::{Commit, LabelRemoval, PullRequest, RepoConfig};
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

// REST response types for the commit listing

#[derive(Deserialize)]
struct CommitEntry {
    commit: CommitBody,
}

#[derive(Deserialize)]
struct CommitBody {
    message: String,
}

impl From<CommitEntry> for Commit {
    fn from(entry: CommitEntry) -> Self {
        Self {
            message: entry.commit.message,
        }
    }
}

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: RepoConfig,
    /// Token for raw HTTP requests (commit listing)
    token: String,
    /// HTTP client for raw requests (commit listing)
    http_client: Client,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, config: RepoConfig) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if !config.is_default_api() {
            builder = builder
                .base_uri(config.api_url.as_str())
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent(concat!("issue-status-sync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            token: token.to_string(),
            http_client,
        })
    }
}

/// Helper to convert octocrab PR to our `PullRequest` type
fn pr_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        head_ref: pr.head.ref_field.clone(),
    }
}

/// Whether an octocrab error is a plain 404 from the API
fn is_not_found(err: &octocrab::Error) -> bool {
    matches!(err, octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404)
}

#[async_trait]
impl IssueTracker for GitHubService {
    async fn get_pull_request(&self, number: u64) -> Result<PullRequest> {
        debug!(number, "getting PR");
        let pr = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .get(number)
            .await?;

        let result = pr_from_octocrab(&pr);
        debug!(number, head_ref = %result.head_ref, "got PR");
        Ok(result)
    }

    async fn list_commits(&self, reference: &str) -> Result<Vec<Commit>> {
        debug!(reference, "listing commits");
        let url = format!(
            "{}/repos/{}/{}/commits",
            self.config.api_url, self.config.owner, self.config.repo
        );

        let response = self
            .http_client
            .get(&url)
            .query(&[("sha", reference)])
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to list commits: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::GitHubApi(format!(
                "listing commits for '{reference}' returned {status}"
            )));
        }

        let entries: Vec<CommitEntry> = response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse commit list: {e}")))?;

        debug!(reference, count = entries.len(), "listed commits");
        Ok(entries.into_iter().map(Commit::from).collect())
    }

    async fn add_labels(&self, issue: u64, labels: &[String]) -> Result<()> {
        debug!(issue, ?labels, "adding labels");
        self.client
            .issues(&self.config.owner, &self.config.repo)
            .add_labels(issue, labels)
            .await?;
        debug!(issue, "added labels");
        Ok(())
    }

    async fn remove_label(&self, issue: u64, label: &str) -> Result<LabelRemoval> {
        debug!(issue, label, "removing label");
        match self
            .client
            .issues(&self.config.owner, &self.config.repo)
            .remove_label(issue, label)
            .await
        {
            Ok(_) => {
                debug!(issue, label, "removed label");
                Ok(LabelRemoval::Removed)
            }
            Err(e) if is_not_found(&e) => {
                debug!(issue, label, "label not present");
                Ok(LabelRemoval::NotPresent)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}
