//! Process exit codes
//!
//! Every failure point has its own code so scripts can branch on the cause.

use crate::sync::{Outcome, SyncFailure};
use crate::types::ExecutionMode;

/// Exit status of the `git-prout` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Run completed
    Ok = 0,
    /// Command line could not be parsed
    ParseFlagsError = 1,
    /// Any other failure (including an unreadable current branch)
    Error = 2,
    /// `git` is not installed
    NotFoundGit = 3,
    /// Not inside a git work tree
    OutsideWorkTree = 4,
    /// Requested remote does not exist
    InvalidRemote = 5,
    /// Fetching the PR ref failed
    FailedFetch = 6,
    /// Hard reset of the checked-out PR branch failed
    FailedUpdate = 7,
    /// Switching to the PR branch failed
    FailedCheckout = 8,
}

impl ExitStatus {
    /// Numeric process exit code
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<&SyncFailure> for ExitStatus {
    fn from(failure: &SyncFailure) -> Self {
        match failure {
            SyncFailure::GitNotFound => Self::NotFoundGit,
            SyncFailure::OutsideWorkTree => Self::OutsideWorkTree,
            SyncFailure::InvalidRemote { .. } => Self::InvalidRemote,
            SyncFailure::BranchUnreadable { .. } => Self::Error,
            SyncFailure::FetchFailed { .. } => Self::FailedFetch,
            SyncFailure::ApplyFailed { mode, .. } => match mode {
                ExecutionMode::Update => Self::FailedUpdate,
                ExecutionMode::Checkout => Self::FailedCheckout,
            },
        }
    }
}

impl From<&Outcome> for ExitStatus {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Ok(_) => Self::Ok,
            Err(failure) => failure.into(),
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}
