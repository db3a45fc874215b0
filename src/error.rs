//! Error types for git-prout

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the git gateway
#[derive(Debug, Error)]
pub enum Error {
    /// The `git` binary could not be spawned
    #[error("'git' command not found")]
    GitNotFound,

    /// A git invocation exited unsuccessfully
    #[error("`git {}` failed: {stderr}", args.join(" "))]
    GitCommand {
        /// Arguments passed to git (without the program name)
        args: Vec<String>,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
        /// Trimmed standard error output
        stderr: String,
    },

    /// I/O error while running a command
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The directory git was asked to run in does not exist
    #[error("working directory '{}' does not exist", .0.display())]
    WorkDirMissing(PathBuf),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
