//! issue-status-sync - issue status labels driven by branch and PR events
//!
//! Runs once per CI trigger. The triggering ref decides the flow:
//! - `refs/pull/<n>/...`: the PR's head branch names the issue, which gets
//!   `status:has_pr`
//! - `refs/heads/issue/<n>...` on branch creation: the issue gets
//!   `status:in_progress`
//! - `refs/heads/release/...`: the latest commit's `(closes #<n>)` suffix
//!   names the issue, which gets `status:completed` and loses the other two
//!
//! Anything that cannot be matched is logged and skipped; label calls never
//! fail the run.

pub mod auth;
pub mod config;
pub mod error;
pub mod event;
pub mod patterns;
pub mod platform;
pub mod sync;
pub mod types;
