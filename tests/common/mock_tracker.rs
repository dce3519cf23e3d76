//! Mock issue tracker for testing
//!
//! Serves canned pull requests and commit listings, keeps a per-issue label
//! set, and records every call so tests can assert on order and mutations.

#![allow(dead_code)]

use async_trait::async_trait;
use issue_status_sync::error::{Error, Result};
use issue_status_sync::platform::IssueTracker;
use issue_status_sync::types::{Commit, LabelRemoval, PullRequest, RepoConfig};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// A recorded call to any tracker method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerCall {
    /// `get_pull_request(number)`
    GetPullRequest(u64),
    /// `list_commits(reference)`
    ListCommits(String),
    /// `add_labels(issue, labels)`
    AddLabels(u64, Vec<String>),
    /// `remove_label(issue, label)`
    RemoveLabel(u64, String),
}

impl TrackerCall {
    /// Whether this call changes label state
    pub const fn is_mutation(&self) -> bool {
        matches!(self, Self::AddLabels(..) | Self::RemoveLabel(..))
    }
}

/// Simple mock tracker for testing
///
/// Features:
/// - Configurable pull requests and commit lists
/// - Per-issue label state, so removals of absent labels report `NotPresent`
/// - Ordered call log for verification
/// - Error injection for failure path testing
pub struct MockTracker {
    config: RepoConfig,
    pull_requests: Mutex<HashMap<u64, PullRequest>>,
    commits: Mutex<HashMap<String, Vec<Commit>>>,
    labels: Mutex<HashMap<u64, HashSet<String>>>,
    calls: Mutex<Vec<TrackerCall>>,
    // Error injection
    error_on_get_pr: Mutex<Option<String>>,
    error_on_list_commits: Mutex<Option<String>>,
    error_on_add_labels: Mutex<Option<String>>,
    error_on_remove_label: Mutex<Option<String>>,
}

impl MockTracker {
    /// Create a mock bound to `test/repo`
    pub fn new() -> Self {
        Self::with_config(RepoConfig::new("test", "repo"))
    }

    /// Create a new mock with the given config
    pub fn with_config(config: RepoConfig) -> Self {
        Self {
            config,
            pull_requests: Mutex::new(HashMap::new()),
            commits: Mutex::new(HashMap::new()),
            labels: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            error_on_get_pr: Mutex::new(None),
            error_on_list_commits: Mutex::new(None),
            error_on_add_labels: Mutex::new(None),
            error_on_remove_label: Mutex::new(None),
        }
    }

    // === Setup methods ===

    /// Register a pull request with the given head branch
    pub fn set_pull_request(&self, number: u64, head_ref: &str) {
        self.pull_requests
            .lock()
            .unwrap()
            .insert(number, make_pr(number, head_ref));
    }

    /// Set the commit messages for a ref, most recent first
    pub fn set_commits(&self, reference: &str, messages: &[&str]) {
        let commits = messages
            .iter()
            .map(|message| Commit {
                message: (*message).to_string(),
            })
            .collect();
        self.commits
            .lock()
            .unwrap()
            .insert(reference.to_string(), commits);
    }

    /// Put a label on an issue without recording a call
    pub fn seed_label(&self, issue: u64, label: &str) {
        self.labels
            .lock()
            .unwrap()
            .entry(issue)
            .or_default()
            .insert(label.to_string());
    }

    // === Error injection methods ===

    /// Make `get_pull_request` return an error
    pub fn fail_get_pr(&self, msg: &str) {
        *self.error_on_get_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `list_commits` return an error
    pub fn fail_list_commits(&self, msg: &str) {
        *self.error_on_list_commits.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `add_labels` return an error
    pub fn fail_add_labels(&self, msg: &str) {
        *self.error_on_add_labels.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `remove_label` return an error (other than "not present")
    pub fn fail_remove_label(&self, msg: &str) {
        *self.error_on_remove_label.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// All calls in order
    pub fn calls(&self) -> Vec<TrackerCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Label-changing calls in order
    pub fn mutations(&self) -> Vec<TrackerCall> {
        self.calls()
            .into_iter()
            .filter(TrackerCall::is_mutation)
            .collect()
    }

    /// Current labels on an issue, sorted
    pub fn labels_on(&self, issue: u64) -> Vec<String> {
        let mut labels: Vec<String> = self
            .labels
            .lock()
            .unwrap()
            .get(&issue)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        labels.sort();
        labels
    }

    /// Assert that the tracker was never called
    pub fn assert_no_calls(&self) {
        let calls = self.calls();
        assert!(calls.is_empty(), "Expected no tracker calls but got: {calls:?}");
    }

    /// Assert that no label was added or removed
    pub fn assert_no_mutations(&self) {
        let mutations = self.mutations();
        assert!(
            mutations.is_empty(),
            "Expected no label mutations but got: {mutations:?}"
        );
    }

    fn record(&self, call: TrackerCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl IssueTracker for MockTracker {
    async fn get_pull_request(&self, number: u64) -> Result<PullRequest> {
        self.record(TrackerCall::GetPullRequest(number));

        if let Some(msg) = self.error_on_get_pr.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        self.pull_requests
            .lock()
            .unwrap()
            .get(&number)
            .cloned()
            .ok_or_else(|| Error::GitHubApi(format!("PR #{number} not found")))
    }

    async fn list_commits(&self, reference: &str) -> Result<Vec<Commit>> {
        self.record(TrackerCall::ListCommits(reference.to_string()));

        if let Some(msg) = self.error_on_list_commits.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        Ok(self
            .commits
            .lock()
            .unwrap()
            .get(reference)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_labels(&self, issue: u64, labels: &[String]) -> Result<()> {
        self.record(TrackerCall::AddLabels(issue, labels.to_vec()));

        if let Some(msg) = self.error_on_add_labels.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        self.labels
            .lock()
            .unwrap()
            .entry(issue)
            .or_default()
            .extend(labels.iter().cloned());
        Ok(())
    }

    async fn remove_label(&self, issue: u64, label: &str) -> Result<LabelRemoval> {
        self.record(TrackerCall::RemoveLabel(issue, label.to_string()));

        if let Some(msg) = self.error_on_remove_label.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let removed = self
            .labels
            .lock()
            .unwrap()
            .get_mut(&issue)
            .is_some_and(|set| set.remove(label));

        Ok(if removed {
            LabelRemoval::Removed
        } else {
            LabelRemoval::NotPresent
        })
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}

/// Build a pull request with the given head branch
pub fn make_pr(number: u64, head_ref: &str) -> PullRequest {
    PullRequest {
        number,
        head_ref: head_ref.to_string(),
    }
}
