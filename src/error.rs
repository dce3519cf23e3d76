//! Error types for issue-status-sync

use thiserror::Error;

/// Errors raised while setting up or talking to the issue tracker
#[derive(Debug, Error)]
pub enum Error {
    /// GitHub API call failed
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Tracker returned something we could not use
    #[error("platform error: {0}")]
    Platform(String),

    /// No usable token
    #[error("authentication error: {0}")]
    Auth(String),

    /// Bad or missing configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Triggering reference could not be classified
    #[error("invalid reference: {0}")]
    InvalidRef(String),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
