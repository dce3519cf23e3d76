//! Label planning - pure mapping from workflow transitions to label steps

use crate::types::StatusLabel;

/// Workflow transition detected for an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Issue branch was created
    Started,
    /// Pull request opened from the issue branch
    PullRequestOpened,
    /// Closing commit reached a release branch
    Completed,
}

/// A single label mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStep {
    /// Add the label to the issue
    Add(StatusLabel),
    /// Remove the label from the issue
    Remove(StatusLabel),
}

impl LabelStep {
    /// The status label this step touches
    pub const fn label(self) -> StatusLabel {
        match self {
            Self::Add(label) | Self::Remove(label) => label,
        }
    }
}

impl std::fmt::Display for LabelStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add(label) => write!(f, "add {label}"),
            Self::Remove(label) => write!(f, "remove {label}"),
        }
    }
}

/// Ordered label steps for a transition
///
/// Completion adds the completed label first, then clears the earlier
/// statuses; every step runs even if an earlier one fails.
pub fn steps_for(transition: Transition) -> Vec<LabelStep> {
    match transition {
        Transition::Started => vec![LabelStep::Add(StatusLabel::InProgress)],
        Transition::PullRequestOpened => vec![LabelStep::Add(StatusLabel::HasPr)],
        Transition::Completed => vec![
            LabelStep::Add(StatusLabel::Completed),
            LabelStep::Remove(StatusLabel::InProgress),
            LabelStep::Remove(StatusLabel::HasPr),
        ],
    }
}
