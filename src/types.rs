//! Core types for git-prout

/// How the fetched PR is applied to the working tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// The PR branch is already checked out; hard-reset it to the fetched head
    Update,
    /// Switch to the PR branch
    Checkout,
}

impl ExecutionMode {
    /// Select the mode for `pr_branch` given the branch checked out at start
    ///
    /// Exact string comparison; `"pr/123"` does not match `"pr/1234"`.
    pub fn select(pr_branch: &str, current_branch: &str) -> Self {
        if pr_branch == current_branch {
            Self::Update
        } else {
            Self::Checkout
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Update => write!(f, "update"),
            Self::Checkout => write!(f, "checkout"),
        }
    }
}

/// A stage of the sync workflow, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// `git` is installed and the working directory is inside a work tree
    EnvironmentCheck,
    /// The requested remote exists
    RemoteValidation,
    /// Read the current branch and pick the execution mode
    BranchDetection,
    /// Force-fetch the PR head into the local PR branch
    Fetch,
    /// Hard reset (update) or switch branches (checkout)
    Apply,
}

impl Stage {
    /// All stages in the order the workflow enters them
    pub const ALL: [Self; 5] = [
        Self::EnvironmentCheck,
        Self::RemoteValidation,
        Self::BranchDetection,
        Self::Fetch,
        Self::Apply,
    ];
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvironmentCheck => write!(f, "environment check"),
            Self::RemoteValidation => write!(f, "remote validation"),
            Self::BranchDetection => write!(f, "branch detection"),
            Self::Fetch => write!(f, "fetch"),
            Self::Apply => write!(f, "apply"),
        }
    }
}
