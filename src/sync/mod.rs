//! Label sync engine
//!
//! Same three-phase shape as a merge run:
//! 1. Classify - turn the trigger into a flow and resolve the issue number
//! 2. Plan - pick the ordered label steps for the transition (pure)
//! 3. Execute - apply the steps through the tracker (effectful)

mod execute;
mod flows;
mod plan;

pub use execute::{LabelOutcome, LabelReport, StepResult, add_label, execute_steps, remove_label};
pub use flows::{
    SyncOutcome, issue_branch_created, pull_request_opened, release_branch_pushed, sync_event,
};
pub use plan::{LabelStep, Transition, steps_for};
