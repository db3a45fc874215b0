//! Sync state machine
//!
//! Each stage is bracketed by reporter events; the first failing stage ends
//! the run and later stages never touch the gateway.

use crate::git::GitGateway;
use crate::pull_request::PullRequestRef;
use crate::sync::{Outcome, Reporter, SyncFailure, SyncRequest, Synced};
use crate::types::{ExecutionMode, Stage};
use tracing::debug;

/// Fetch a PR and check it out, or update it if already checked out
///
/// Runs the five stages in order against `git` and returns the tagged
/// outcome. The final event sent to `reporter` is either `on_success` or
/// `on_stage_failure`.
pub fn run_sync(git: &dyn GitGateway, request: &SyncRequest, reporter: &dyn Reporter) -> Outcome {
    let outcome = execute(git, request, reporter);

    match &outcome {
        Ok(synced) => {
            debug!(mode = %synced.mode, branch = %synced.branch, "sync complete");
            reporter.on_success(synced);
        }
        Err(failure) => {
            debug!(stage = %failure.stage(), error = %failure, "sync failed");
            reporter.on_stage_failure(failure);
        }
    }

    outcome
}

fn execute(git: &dyn GitGateway, request: &SyncRequest, reporter: &dyn Reporter) -> Outcome {
    reporter.on_stage_start(Stage::EnvironmentCheck);
    check_environment(git)?;
    reporter.on_stage_success(Stage::EnvironmentCheck);

    reporter.on_stage_start(Stage::RemoteValidation);
    validate_remote(git, &request.remote)?;
    reporter.on_stage_success(Stage::RemoteValidation);

    reporter.on_stage_start(Stage::BranchDetection);
    let current = git
        .current_branch()
        .map_err(|source| SyncFailure::BranchUnreadable { source })?;
    let pr = PullRequestRef::new(&request.remote, request.number, request.force);
    let mode = ExecutionMode::select(pr.branch(), &current);
    debug!(current = %current, branch = pr.branch(), %mode, "selected execution mode");
    reporter.on_mode_selected(mode);
    reporter.on_stage_success(Stage::BranchDetection);

    reporter.on_stage_start(Stage::Fetch);
    debug!(%pr, "fetching pull request");
    git.fetch(pr.remote(), pr.refspec())
        .map_err(|source| SyncFailure::FetchFailed {
            remote: pr.remote().to_string(),
            refspec: pr.refspec().to_string(),
            source,
        })?;
    reporter.on_stage_success(Stage::Fetch);

    reporter.on_stage_start(Stage::Apply);
    apply(git, &pr, mode)?;
    reporter.on_stage_success(Stage::Apply);

    Ok(Synced {
        mode,
        branch: pr.branch().to_string(),
    })
}

fn check_environment(git: &dyn GitGateway) -> Result<(), SyncFailure> {
    if !git.has_tool() {
        return Err(SyncFailure::GitNotFound);
    }
    if !git.is_inside_work_tree() {
        return Err(SyncFailure::OutsideWorkTree);
    }
    Ok(())
}

fn validate_remote(git: &dyn GitGateway, remote: &str) -> Result<(), SyncFailure> {
    match git.list_remotes() {
        Ok(known) if known.iter().any(|r| r == remote) => Ok(()),
        Ok(known) => Err(SyncFailure::InvalidRemote {
            remote: remote.to_string(),
            known,
            source: None,
        }),
        Err(e) => Err(SyncFailure::InvalidRemote {
            remote: remote.to_string(),
            known: Vec::new(),
            source: Some(e),
        }),
    }
}

/// Update mode always hard-resets, regardless of `force`
fn apply(git: &dyn GitGateway, pr: &PullRequestRef, mode: ExecutionMode) -> Result<(), SyncFailure> {
    let result = match mode {
        ExecutionMode::Update => git.hard_reset_to_head(),
        ExecutionMode::Checkout => git.checkout(pr.branch(), pr.force()),
    };

    result.map_err(|source| SyncFailure::ApplyFailed {
        mode,
        branch: pr.branch().to_string(),
        source,
    })
}
