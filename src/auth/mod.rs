//! Authentication for the GitHub API
//!
//! Tokens come from the process environment (CI secrets or a local `.env`).

mod github;

pub use github::{GitHubAuthConfig, TOKEN_ENV_VARS, get_github_auth, resolve_github_auth};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from the named environment variable
    EnvVar(&'static str),
}

impl std::fmt::Display for AuthSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(name) => write!(f, "${name}"),
        }
    }
}
