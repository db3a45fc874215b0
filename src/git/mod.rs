//! Git gateway
//!
//! The sync workflow only talks to git through [`GitGateway`], so it can run
//! against [`SystemGit`] in production and a mock in tests.

mod system;

pub use system::SystemGit;

use crate::error::Result;

/// The git operations the sync workflow needs
///
/// All calls are synchronous and block until git finishes.
pub trait GitGateway {
    /// Whether the `git` binary is available
    fn has_tool(&self) -> bool;

    /// Whether the working directory is inside a git work tree
    fn is_inside_work_tree(&self) -> bool;

    /// Names of all configured remotes
    fn list_remotes(&self) -> Result<Vec<String>>;

    /// Name of the checked-out branch (`HEAD` when detached)
    fn current_branch(&self) -> Result<String>;

    /// Force-fetch `refspec` from `remote`
    ///
    /// Must be allowed to update the ref of the checked-out branch.
    fn fetch(&self, remote: &str, refspec: &str) -> Result<()>;

    /// Switch to `branch`, discarding local modifications when `force` is set
    fn checkout(&self, branch: &str, force: bool) -> Result<()>;

    /// Reset the index and working tree to `HEAD`
    fn hard_reset_to_head(&self) -> Result<()>;
}
