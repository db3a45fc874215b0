//! `git` subprocess implementation of [`GitGateway`]

use crate::error::{Error, Result};
use crate::git::GitGateway;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

const GIT: &str = "git";

/// Runs the `git` binary found on `PATH`
#[derive(Debug, Clone, Default)]
pub struct SystemGit {
    /// Working directory for every command (process cwd when `None`)
    work_dir: Option<PathBuf>,
}

impl SystemGit {
    /// Run git in the current working directory
    pub const fn new() -> Self {
        Self { work_dir: None }
    }

    /// Run git in `path`
    pub fn in_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: Some(path.into()),
        }
    }

    /// Working directory override, if any
    pub fn work_dir(&self) -> Option<&Path> {
        self.work_dir.as_deref()
    }

    /// Run `git <args>` and return its trimmed stdout
    fn run(&self, args: &[&str]) -> Result<String> {
        let mut cmd = Command::new(GIT);
        cmd.args(args);
        if let Some(dir) = &self.work_dir {
            // Spawning in a missing directory also reports NotFound
            if !dir.is_dir() {
                return Err(Error::WorkDirMissing(dir.clone()));
            }
            cmd.current_dir(dir);
        }

        debug!(?args, "running git");
        let output = cmd.output().map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::GitNotFound,
            _ => Error::Io(e),
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            debug!(?args, code = ?output.status.code(), %stderr, "git failed");
            return Err(Error::GitCommand {
                args: args.iter().map(ToString::to_string).collect(),
                code: output.status.code(),
                stderr,
            });
        }
        if !stderr.is_empty() {
            debug!(%stderr, "git stderr");
        }

        Ok(clean_stdout(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Trim surrounding whitespace and NUL padding
fn clean_stdout(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\0')
        .to_string()
}

/// One remote name per non-empty line
fn parse_remotes(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

impl GitGateway for SystemGit {
    fn has_tool(&self) -> bool {
        which::which(GIT).is_ok()
    }

    fn is_inside_work_tree(&self) -> bool {
        self.run(&["rev-parse", "--is-inside-work-tree"])
            .is_ok_and(|out| out == "true")
    }

    fn list_remotes(&self) -> Result<Vec<String>> {
        let out = self.run(&["remote"])?;
        Ok(parse_remotes(&out))
    }

    fn current_branch(&self) -> Result<String> {
        self.run(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    fn fetch(&self, remote: &str, refspec: &str) -> Result<()> {
        self.run(&["fetch", remote, refspec, "--force", "--update-head-ok"])?;
        Ok(())
    }

    fn checkout(&self, branch: &str, force: bool) -> Result<()> {
        let mut args = vec!["checkout", branch];
        if force {
            args.push("--force");
        }
        self.run(&args)?;
        Ok(())
    }

    fn hard_reset_to_head(&self) -> Result<()> {
        self.run(&["reset", "--hard", "HEAD"])?;
        Ok(())
    }
}
