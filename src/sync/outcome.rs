//! Workflow input and result types

use crate::error::Error;
use crate::types::{ExecutionMode, Stage};
use thiserror::Error;

/// Parameters for a single sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    /// Remote to fetch from
    pub remote: String,
    /// PR number (positive)
    pub number: u64,
    /// Force checkout over local modifications
    pub force: bool,
}

impl SyncRequest {
    /// Create a request
    pub fn new(remote: impl Into<String>, number: u64, force: bool) -> Self {
        Self {
            remote: remote.into(),
            number,
            force,
        }
    }
}

/// A successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synced {
    /// Mode the run executed in
    pub mode: ExecutionMode,
    /// Local PR branch now checked out
    pub branch: String,
}

/// Why a run stopped
///
/// The display text is the one-line message shown to the user. Underlying
/// git errors are kept as the error source.
#[derive(Debug, Error)]
pub enum SyncFailure {
    /// `git` is not installed
    #[error("'git' command is required.")]
    GitNotFound,

    /// The working directory is not inside a git work tree
    #[error("'git-prout' needs to be executed in work tree.")]
    OutsideWorkTree,

    /// The requested remote is not configured
    #[error("'{remote}' is invalid remote.")]
    InvalidRemote {
        /// Requested remote
        remote: String,
        /// Remotes that do exist (empty when listing failed)
        known: Vec<String>,
        /// Listing error, if the remotes could not be read
        #[source]
        source: Option<Error>,
    },

    /// The current branch could not be read
    #[error("Failed to acquire the current branch.")]
    BranchUnreadable {
        /// Underlying git error
        #[source]
        source: Error,
    },

    /// Fetching the PR ref failed
    #[error("Failed to fetch remote ref '{remote} {refspec}'.")]
    FetchFailed {
        /// Remote that was fetched from
        remote: String,
        /// Ref-spec that was requested
        refspec: String,
        /// Underlying git error
        #[source]
        source: Error,
    },

    /// Resetting or switching to the PR branch failed
    #[error("Failed to {mode}.")]
    ApplyFailed {
        /// Mode that was being applied
        mode: ExecutionMode,
        /// PR branch
        branch: String,
        /// Underlying git error
        #[source]
        source: Error,
    },
}

impl SyncFailure {
    /// Stage the run stopped at
    pub const fn stage(&self) -> Stage {
        match self {
            Self::GitNotFound | Self::OutsideWorkTree => Stage::EnvironmentCheck,
            Self::InvalidRemote { .. } => Stage::RemoteValidation,
            Self::BranchUnreadable { .. } => Stage::BranchDetection,
            Self::FetchFailed { .. } => Stage::Fetch,
            Self::ApplyFailed { .. } => Stage::Apply,
        }
    }
}

/// Result of a sync run
pub type Outcome = std::result::Result<Synced, SyncFailure>;
