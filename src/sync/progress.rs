//! Progress reporting for the sync workflow

use crate::sync::{SyncFailure, Synced};
use crate::types::{ExecutionMode, Stage};

/// Receives workflow events for display
///
/// For every stage entered, `on_stage_start` is followed by exactly one of
/// `on_stage_success` or `on_stage_failure`. Implementations must not
/// influence the run.
pub trait Reporter {
    /// A stage is about to run
    fn on_stage_start(&self, stage: Stage);

    /// The execution mode was chosen (during branch detection)
    fn on_mode_selected(&self, _mode: ExecutionMode) {}

    /// A stage completed
    fn on_stage_success(&self, stage: Stage);

    /// The run stopped at `failure.stage()`
    fn on_stage_failure(&self, failure: &SyncFailure);

    /// The whole run completed
    fn on_success(&self, synced: &Synced);
}

/// Reporter that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn on_stage_start(&self, _stage: Stage) {}
    fn on_stage_success(&self, _stage: Stage) {}
    fn on_stage_failure(&self, _failure: &SyncFailure) {}
    fn on_success(&self, _synced: &Synced) {}
}
