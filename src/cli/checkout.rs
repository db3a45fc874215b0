//! Checkout command - fetch a PR and check it out or update it

use crate::cli::{CliReporter, OutputOptions};
use git_prout::exit::ExitStatus;
use git_prout::git::GitGateway;
use git_prout::sync::{SyncFailure, SyncRequest, run_sync};
use std::error::Error as _;
use tracing::debug;

/// Run the sync workflow and map its outcome to an exit status
pub fn run_checkout(
    git: &dyn GitGateway,
    request: &SyncRequest,
    output: OutputOptions,
) -> ExitStatus {
    if output.quiet {
        debug!("quiet mode enabled");
    }
    debug!(remote = %request.remote, number = request.number, force = request.force, "starting");

    let reporter = CliReporter::new(output.quiet);
    let outcome = run_sync(git, request, &reporter);

    if let Err(failure) = &outcome {
        log_failure_details(failure);
    }

    ExitStatus::from(&outcome)
}

/// Debug-level diagnostics that are not part of the one-line message
fn log_failure_details(failure: &SyncFailure) {
    if let SyncFailure::InvalidRemote { known, .. } = failure {
        debug!("remotes -> [{}]", known.join(", "));
    }

    let mut source = failure.source();
    while let Some(cause) = source {
        debug!("caused by: {cause}");
        source = cause.source();
    }
}
