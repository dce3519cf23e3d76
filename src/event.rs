//! Trigger events and their classification
//!
//! GitHub Actions describes the triggering ref as a path:
//! - pull request: `refs/pull/19/merge`
//! - branch push/create: `refs/heads/<branch>`, e.g. `refs/heads/issue/123-x`
//!   or `refs/heads/release/0.1.2`
//!
//! [`Trigger::from_ref`] turns that string into an enum so dispatch is an
//! exhaustive `match` instead of string comparisons.

use crate::error::{Error, Result};

/// Prefix stripped from branch refs to get the branch name
pub const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Second ref segment that marks a pull request ref
const PULL_MARKER: &str = "pull";

/// Kind of CI event that triggered the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Branch or tag creation (`create`)
    Create,
    /// Push to an existing ref (`push`)
    Push,
    /// Pull request activity (`pull_request`, `pull_request_target`)
    PullRequest,
    /// Anything else, kept verbatim
    Other(String),
}

impl From<&str> for EventKind {
    fn from(s: &str) -> Self {
        match s.trim() {
            "create" => Self::Create,
            "push" => Self::Push,
            "pull_request" | "pull_request_target" => Self::PullRequest,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Push => write!(f, "push"),
            Self::PullRequest => write!(f, "pull_request"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Branch category, from the first path component of the branch name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchKind {
    /// `release/...`
    Release,
    /// `issue/...`
    Issue,
    /// `main` or `master`
    Main,
    /// Any other branch (or a ref too short to have a branch type)
    Other(String),
}

impl BranchKind {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "release" => Self::Release,
            "issue" => Self::Issue,
            "main" | "master" => Self::Main,
            other => Self::Other(other.to_string()),
        }
    }
}

/// What a triggering ref refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// A pull request ref
    PullRequest {
        /// PR number from the ref
        number: u64,
    },
    /// A branch ref
    Branch {
        /// Branch category
        kind: BranchKind,
        /// Branch name with `refs/heads/` stripped
        name: String,
    },
}

impl Trigger {
    /// Classify a full ref string
    ///
    /// Fails only for pull request refs whose number segment is missing or
    /// not a number; every other ref classifies as some branch.
    pub fn from_ref(git_ref: &str) -> Result<Self> {
        let mut segments = git_ref.split('/').skip(1);
        let marker = segments.next();
        let third = segments.next();

        if marker == Some(PULL_MARKER) {
            let number = third
                .and_then(|s| s.parse::<u64>().ok())
                .ok_or_else(|| Error::InvalidRef(format!("no pull request number in '{git_ref}'")))?;
            return Ok(Self::PullRequest { number });
        }

        let name = git_ref
            .strip_prefix(BRANCH_REF_PREFIX)
            .unwrap_or(git_ref)
            .to_string();

        Ok(Self::Branch {
            kind: BranchKind::from_tag(third.unwrap_or_default()),
            name,
        })
    }
}

/// The CI context a run was invoked with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerEvent {
    /// Full triggering ref
    pub git_ref: String,
    /// Event kind
    pub kind: EventKind,
}

impl TriggerEvent {
    /// Build an event from raw CI strings
    pub fn new(git_ref: impl Into<String>, kind: &str) -> Self {
        Self {
            git_ref: git_ref.into(),
            kind: EventKind::from(kind),
        }
    }

    /// Classify this event's ref
    pub fn trigger(&self) -> Result<Trigger> {
        Trigger::from_ref(&self.git_ref)
    }
}
