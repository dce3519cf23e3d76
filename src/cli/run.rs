//! Sync command - classify the trigger and apply label changes

use crate::cli::Cli;
use crate::cli::context::CommandContext;
use issue_status_sync::error::Result;
use issue_status_sync::sync::{LabelOutcome, SyncOutcome, sync_event};
use tracing::info;

/// Run one sync for the event described by `args`
///
/// Only setup problems are returned as errors; whatever the flow decides
/// is logged and the run still succeeds.
pub async fn run_sync(args: &Cli) -> Result<()> {
    let ctx = CommandContext::new(args)?;

    info!(
        repo = %ctx.config.repo,
        git_ref = %ctx.event.git_ref,
        event = %ctx.event.kind,
        dry_run = ctx.config.dry_run,
        "syncing issue status"
    );

    let outcome = sync_event(&ctx.event, ctx.tracker.as_ref(), &ctx.config).await;
    log_summary(&outcome);
    Ok(())
}

fn log_summary(outcome: &SyncOutcome) {
    match outcome {
        SyncOutcome::Labeled(report) => {
            for result in &report.results {
                let status = match &result.outcome {
                    LabelOutcome::Applied => "applied",
                    LabelOutcome::NotPresent => "not present",
                    LabelOutcome::Failed(_) => "failed",
                    LabelOutcome::Skipped => "skipped",
                };
                info!(issue = report.issue, label = %result.label, "{}: {status}", result.step);
            }
            info!(
                issue = report.issue,
                applied = report.applied_count(),
                "Sync complete"
            );
        }
        SyncOutcome::NoIssue { .. } => info!("Sync complete: no issue referenced"),
        SyncOutcome::Unavailable { reason } => info!(%reason, "Sync complete: data unavailable"),
        SyncOutcome::Ignored { reason } => info!(%reason, "Sync complete: nothing to do"),
    }
}
