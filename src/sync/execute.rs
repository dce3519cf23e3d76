//! Label execution - effectful operations
//!
//! Takes planned [`LabelStep`]s and applies them through the tracker. No
//! step failure is propagated: each one is recorded in the report and the
//! remaining steps still run.

use crate::config::SyncConfig;
use crate::platform::IssueTracker;
use crate::sync::plan::LabelStep;
use crate::types::LabelRemoval;
use tracing::{debug, info, warn};

/// Result of a single label call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOutcome {
    /// The tracker accepted the change
    Applied,
    /// Removal of a label the issue did not have
    NotPresent,
    /// The tracker rejected the call; the run carries on
    Failed(String),
    /// Dry run, no call made
    Skipped,
}

/// One executed step and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// The planned step
    pub step: LabelStep,
    /// Concrete label string used
    pub label: String,
    /// What happened
    pub outcome: LabelOutcome,
}

/// Result of applying a plan to one issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelReport {
    /// Issue the labels were applied to
    pub issue: u64,
    /// Per-step results, in execution order
    pub results: Vec<StepResult>,
}

impl LabelReport {
    /// Whether no step failed
    pub fn is_success(&self) -> bool {
        !self
            .results
            .iter()
            .any(|r| matches!(r.outcome, LabelOutcome::Failed(_)))
    }

    /// Number of steps the tracker accepted
    pub fn applied_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == LabelOutcome::Applied)
            .count()
    }
}

/// Execute label steps for an issue (EFFECTFUL)
///
/// Steps run strictly in order. In dry-run mode no tracker call is made and
/// every step is reported as [`LabelOutcome::Skipped`].
pub async fn execute_steps(
    issue: u64,
    steps: &[LabelStep],
    tracker: &dyn IssueTracker,
    config: &SyncConfig,
) -> LabelReport {
    let mut results = Vec::with_capacity(steps.len());

    for &step in steps {
        let label = config.labels.name(step.label()).to_string();

        let outcome = if config.dry_run {
            info!(issue, %label, "dry run: would {}", verb(step));
            LabelOutcome::Skipped
        } else {
            match step {
                LabelStep::Add(_) => add_label(tracker, issue, &label).await,
                LabelStep::Remove(_) => remove_label(tracker, issue, &label).await,
            }
        };

        results.push(StepResult {
            step,
            label,
            outcome,
        });
    }

    LabelReport { issue, results }
}

const fn verb(step: LabelStep) -> &'static str {
    match step {
        LabelStep::Add(_) => "add",
        LabelStep::Remove(_) => "remove",
    }
}

/// Add one label to an issue, logging instead of failing
pub async fn add_label(tracker: &dyn IssueTracker, issue: u64, label: &str) -> LabelOutcome {
    match tracker.add_labels(issue, &[label.to_string()]).await {
        Ok(()) => {
            info!("{label} added to issue #{issue}");
            LabelOutcome::Applied
        }
        Err(e) => {
            warn!(issue, label, error = %e, "couldn't add label to issue #{issue}");
            LabelOutcome::Failed(e.to_string())
        }
    }
}

/// Remove one label from an issue
///
/// A label the issue does not carry is the normal case after a skipped
/// workflow stage and is only logged at debug level.
pub async fn remove_label(tracker: &dyn IssueTracker, issue: u64, label: &str) -> LabelOutcome {
    match tracker.remove_label(issue, label).await {
        Ok(LabelRemoval::Removed) => {
            info!("{label} removed from issue #{issue}");
            LabelOutcome::Applied
        }
        Ok(LabelRemoval::NotPresent) => {
            debug!(issue, label, "label was not on issue");
            LabelOutcome::NotPresent
        }
        Err(e) => {
            warn!(issue, label, error = %e, "couldn't remove label from issue #{issue}");
            LabelOutcome::Failed(e.to_string())
        }
    }
}
