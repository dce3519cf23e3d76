//! Issue number extraction from branch names and commit messages
//!
//! Branch convention: `issue/<number>[anything]`, e.g. `issue/123-fix-bug`.
//!
//! Commit convention: `<description> (<keyword> #<number>)` where keyword is
//! one of `close`, `closes`, `fix`, `fixes` (case-sensitive), e.g.
//! `Add login form (closes #42)`.

use regex::Regex;
use std::sync::LazyLock;

/// Prefix of issue branches
pub const ISSUE_BRANCH_PREFIX: &str = "issue/";

static ISSUE_BRANCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^issue/([0-9]+)").expect("issue branch pattern is valid"));

// The `"-:` range is deliberate: it admits `#`, `(`, `)`, digits and the
// other ASCII punctuation between `"` and `:` in the description.
static CLOSING_COMMIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([\w\s.,'"-:`@]+) \((?:close|closes|fixes|fix) #([0-9]+)\)"#)
        .expect("closing commit pattern is valid")
});

/// Issue number from an issue branch name
///
/// Returns `None` when the branch does not start with `issue/<digits>` or
/// the number does not fit in a `u64`.
pub fn issue_from_branch(branch: &str) -> Option<u64> {
    ISSUE_BRANCH
        .captures(branch)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Issue number closed by a commit message
///
/// The message must start with the description; trailing text after the
/// closing parenthesis (further lines, trailers) is ignored.
pub fn issue_from_commit_message(message: &str) -> Option<u64> {
    CLOSING_COMMIT
        .captures(message)
        .and_then(|caps| caps.get(2))
        .and_then(|m| m.as_str().parse().ok())
}
