//! GitHub token discovery

use super::AuthSource;
use crate::error::{Error, Result};
use tracing::debug;

/// Environment variables checked for a token, in priority order
pub const TOKEN_ENV_VARS: [&str; 3] = ["ACCESS_TOKEN", "GITHUB_TOKEN", "GH_TOKEN"];

/// Resolved GitHub credentials
#[derive(Clone)]
pub struct GitHubAuthConfig {
    /// API token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

impl std::fmt::Debug for GitHubAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuthConfig")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Read a GitHub token from the process environment
pub fn get_github_auth() -> Result<GitHubAuthConfig> {
    resolve_github_auth(|name| std::env::var(name).ok())
}

/// Pick the first non-empty token from `lookup`
///
/// Split out from [`get_github_auth`] so callers (and tests) can supply
/// their own environment.
pub fn resolve_github_auth<F>(lookup: F) -> Result<GitHubAuthConfig>
where
    F: Fn(&str) -> Option<String>,
{
    for name in TOKEN_ENV_VARS {
        if let Some(token) = lookup(name) {
            let token = token.trim();
            if !token.is_empty() {
                debug!(source = name, "found GitHub token");
                return Ok(GitHubAuthConfig {
                    token: token.to_string(),
                    source: AuthSource::EnvVar(name),
                });
            }
        }
    }

    Err(Error::Auth(format!(
        "no GitHub token found; set one of {}",
        TOKEN_ENV_VARS.join(", ")
    )))
}
