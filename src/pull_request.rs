//! Pull request descriptor
//!
//! Derives the local branch name and fetch ref-spec for a PR number.

use std::fmt;

/// Prefix of the local branch a pull request is checked out into
pub const BRANCH_PREFIX: &str = "pr/";

/// A pull request on a remote, with its derived local names
///
/// `branch` and `refspec` are computed once from `number` and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    remote: String,
    number: u64,
    branch: String,
    refspec: String,
    force: bool,
}

impl PullRequestRef {
    /// Build the descriptor for PR `number` on `remote`
    ///
    /// `remote` is not validated here and `number` is expected to be
    /// positive; both are checked before this is called.
    pub fn new(remote: impl Into<String>, number: u64, force: bool) -> Self {
        let branch = format!("{BRANCH_PREFIX}{number}");
        let refspec = format!("pull/{number}/head:{branch}");
        Self {
            remote: remote.into(),
            number,
            branch,
            refspec,
            force,
        }
    }

    /// Remote the PR is fetched from
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// PR number
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// Local branch name (`pr/<number>`)
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Fetch ref-spec (`pull/<number>/head:pr/<number>`)
    pub fn refspec(&self) -> &str {
        &self.refspec
    }

    /// Whether checkout should discard local modifications
    pub const fn force(&self) -> bool {
        self.force
    }
}

impl fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({} {})", self.number, self.remote, self.refspec)
    }
}
