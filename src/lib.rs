//! git-prout - check out GitHub pull requests as local branches
//!
//! Fetches `pull/<number>/head` from a remote into a local `pr/<number>`
//! branch, then either switches to it or, when it is already checked out,
//! hard-resets it to the fetched head.
//!
//! The workflow in [`sync`] talks to git only through
//! [`git::GitGateway`] and reports progress through [`sync::Reporter`], so
//! it has no terminal or process concerns of its own.

pub mod error;
pub mod exit;
pub mod git;
pub mod pull_request;
pub mod sync;
pub mod types;

pub use error::{Error, Result};
pub use exit::ExitStatus;
pub use git::{GitGateway, SystemGit};
pub use pull_request::PullRequestRef;
pub use sync::{NoopReporter, Outcome, Reporter, SyncFailure, SyncRequest, Synced, run_sync};
pub use types::{ExecutionMode, Stage};
