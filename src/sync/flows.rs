//! Event dispatch and the three label flows
//!
//! Every flow ends in a [`SyncOutcome`] instead of an error: a missing issue
//! number or an unreachable pull request is an expected result of running
//! on arbitrary branches, not a failure of the hook.

use crate::config::SyncConfig;
use crate::event::{BranchKind, EventKind, Trigger, TriggerEvent};
use crate::patterns::{issue_from_branch, issue_from_commit_message};
use crate::platform::IssueTracker;
use crate::sync::execute::{LabelReport, execute_steps};
use crate::sync::plan::{Transition, steps_for};
use tracing::{debug, info, warn};

/// How a sync run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// An issue was found and its label steps were executed
    Labeled(LabelReport),
    /// No issue number could be derived from the searched text
    NoIssue {
        /// Branch name or commit message that was searched
        searched: String,
    },
    /// Data needed to find the issue could not be fetched
    Unavailable {
        /// Why the fetch failed
        reason: String,
    },
    /// The event does not map to any flow
    Ignored {
        /// Why nothing was done
        reason: String,
    },
}

impl SyncOutcome {
    /// The report, if labels were touched
    pub const fn report(&self) -> Option<&LabelReport> {
        match self {
            Self::Labeled(report) => Some(report),
            _ => None,
        }
    }

    fn ignored(reason: impl Into<String>) -> Self {
        Self::Ignored {
            reason: reason.into(),
        }
    }
}

/// Classify a trigger event and run the matching flow
///
/// Performs at most one category of label mutation.
pub async fn sync_event(
    event: &TriggerEvent,
    tracker: &dyn IssueTracker,
    config: &SyncConfig,
) -> SyncOutcome {
    debug!(
        repo = %tracker.config(),
        git_ref = %event.git_ref,
        kind = %event.kind,
        "classifying event"
    );

    let trigger = match event.trigger() {
        Ok(trigger) => trigger,
        Err(e) => {
            warn!(error = %e, "unrecognized trigger ref");
            return SyncOutcome::ignored(e.to_string());
        }
    };

    match trigger {
        Trigger::PullRequest { number } => {
            info!(number, "A pull request was opened");
            pull_request_opened(number, tracker, config).await
        }
        Trigger::Branch { kind, name } => match kind {
            BranchKind::Release => {
                info!(branch = %name, "Release branch discovered");
                release_branch_pushed(&name, tracker, config).await
            }
            BranchKind::Issue => {
                info!(branch = %name, "Issue branch discovered");
                if event.kind == EventKind::Create {
                    issue_branch_created(&name, tracker, config).await
                } else {
                    debug!(kind = %event.kind, "issue branch event is not a creation");
                    SyncOutcome::ignored(format!("'{}' event on issue branch", event.kind))
                }
            }
            BranchKind::Main => {
                info!(branch = %name, "Main/master branch");
                SyncOutcome::ignored("main branch")
            }
            BranchKind::Other(tag) => {
                info!(branch = %name, "No label flow for this branch type");
                SyncOutcome::ignored(format!("unhandled branch type '{tag}'"))
            }
        },
    }
}

/// Pull request opened: label the issue named by the head branch
pub async fn pull_request_opened(
    number: u64,
    tracker: &dyn IssueTracker,
    config: &SyncConfig,
) -> SyncOutcome {
    let pr = match tracker.get_pull_request(number).await {
        Ok(pr) => pr,
        Err(e) => {
            warn!(error = %e, "Failed to find PR {number}");
            return SyncOutcome::Unavailable {
                reason: e.to_string(),
            };
        }
    };

    info!(head = %pr.head_ref, "PR #{number} head branch");
    let Some(issue) = issue_from_branch(&pr.head_ref) else {
        info!("Couldn't find an issue number in \"{}\"", pr.head_ref);
        return SyncOutcome::NoIssue {
            searched: pr.head_ref,
        };
    };

    let steps = steps_for(Transition::PullRequestOpened);
    SyncOutcome::Labeled(execute_steps(issue, &steps, tracker, config).await)
}

/// Issue branch created: mark the issue in progress
pub async fn issue_branch_created(
    branch: &str,
    tracker: &dyn IssueTracker,
    config: &SyncConfig,
) -> SyncOutcome {
    let Some(issue) = issue_from_branch(branch) else {
        info!("Couldn't find an issue number in \"{branch}\"");
        return SyncOutcome::NoIssue {
            searched: branch.to_string(),
        };
    };

    let steps = steps_for(Transition::Started);
    SyncOutcome::Labeled(execute_steps(issue, &steps, tracker, config).await)
}

/// Release branch pushed: complete the issue closed by the latest commit
pub async fn release_branch_pushed(
    branch: &str,
    tracker: &dyn IssueTracker,
    config: &SyncConfig,
) -> SyncOutcome {
    let message = match tracker.latest_commit_message(branch).await {
        Ok(Some(message)) => message,
        Ok(None) => {
            info!(branch, "Couldn't find any commits");
            String::new()
        }
        Err(e) => {
            info!(branch, error = %e, "Couldn't find any commits");
            String::new()
        }
    };

    let Some(issue) = issue_from_commit_message(&message) else {
        info!("Couldn't find an issue number in \"{message}\"");
        return SyncOutcome::NoIssue { searched: message };
    };

    let steps = steps_for(Transition::Completed);
    SyncOutcome::Labeled(execute_steps(issue, &steps, tracker, config).await)
}
