//! Mock git gateway and recording reporter for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use git_prout::error::{Error, Result};
use git_prout::git::GitGateway;
use git_prout::sync::{Reporter, SyncFailure, Synced};
use git_prout::types::{ExecutionMode, Stage};
use std::sync::Mutex;

/// A single recorded gateway call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    HasTool,
    IsInsideWorkTree,
    ListRemotes,
    CurrentBranch,
    Fetch { remote: String, refspec: String },
    Checkout { branch: String, force: bool },
    HardReset,
}

impl GitCall {
    /// Whether this call changes refs or the working tree
    pub const fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Fetch { .. } | Self::Checkout { .. } | Self::HardReset
        )
    }
}

/// Simple mock git gateway for testing
///
/// Features:
/// - Configurable environment, remotes and current branch
/// - `checkout` moves the current branch, like real git
/// - Ordered call tracking for verification
/// - Error injection for failure path testing
pub struct MockGit {
    has_tool: Mutex<bool>,
    inside_work_tree: Mutex<bool>,
    remotes: Mutex<Vec<String>>,
    current_branch: Mutex<String>,
    // Call tracking
    calls: Mutex<Vec<GitCall>>,
    // Error injection
    error_on_list_remotes: Mutex<Option<String>>,
    error_on_current_branch: Mutex<Option<String>>,
    error_on_fetch: Mutex<Option<String>>,
    error_on_checkout: Mutex<Option<String>>,
    error_on_reset: Mutex<Option<String>>,
}

fn injected(args: &[&str], msg: &str) -> Error {
    Error::GitCommand {
        args: args.iter().map(ToString::to_string).collect(),
        code: Some(128),
        stderr: msg.to_string(),
    }
}

impl Default for MockGit {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGit {
    /// A healthy repository on `master` with a single `origin` remote
    pub fn new() -> Self {
        Self {
            has_tool: Mutex::new(true),
            inside_work_tree: Mutex::new(true),
            remotes: Mutex::new(vec!["origin".to_string()]),
            current_branch: Mutex::new("master".to_string()),
            calls: Mutex::new(Vec::new()),
            error_on_list_remotes: Mutex::new(None),
            error_on_current_branch: Mutex::new(None),
            error_on_fetch: Mutex::new(None),
            error_on_checkout: Mutex::new(None),
            error_on_reset: Mutex::new(None),
        }
    }

    // === Setup methods ===

    /// Pretend `git` is not installed
    pub fn without_git(self) -> Self {
        *self.has_tool.lock().unwrap() = false;
        self
    }

    /// Pretend the working directory is outside any work tree
    pub fn outside_work_tree(self) -> Self {
        *self.inside_work_tree.lock().unwrap() = false;
        self
    }

    /// Replace the configured remotes
    pub fn with_remotes(self, remotes: &[&str]) -> Self {
        *self.remotes.lock().unwrap() = remotes.iter().map(ToString::to_string).collect();
        self
    }

    /// Set the checked-out branch
    pub fn on_branch(self, branch: &str) -> Self {
        *self.current_branch.lock().unwrap() = branch.to_string();
        self
    }

    // === Error injection methods ===

    /// Make `list_remotes` return an error
    pub fn fail_list_remotes(&self, msg: &str) {
        *self.error_on_list_remotes.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `current_branch` return an error
    pub fn fail_current_branch(&self, msg: &str) {
        *self.error_on_current_branch.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `fetch` return an error
    pub fn fail_fetch(&self, msg: &str) {
        *self.error_on_fetch.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `checkout` return an error
    pub fn fail_checkout(&self, msg: &str) {
        *self.error_on_checkout.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `hard_reset_to_head` return an error
    pub fn fail_reset(&self, msg: &str) {
        *self.error_on_reset.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// All calls, in order
    pub fn get_calls(&self) -> Vec<GitCall> {
        self.calls.lock().unwrap().clone()
    }

    /// All `fetch` calls as (remote, refspec)
    pub fn get_fetch_calls(&self) -> Vec<(String, String)> {
        self.get_calls()
            .into_iter()
            .filter_map(|c| match c {
                GitCall::Fetch { remote, refspec } => Some((remote, refspec)),
                _ => None,
            })
            .collect()
    }

    /// All `checkout` calls as (branch, force)
    pub fn get_checkout_calls(&self) -> Vec<(String, bool)> {
        self.get_calls()
            .into_iter()
            .filter_map(|c| match c {
                GitCall::Checkout { branch, force } => Some((branch, force)),
                _ => None,
            })
            .collect()
    }

    /// Number of `hard_reset_to_head` calls
    pub fn reset_call_count(&self) -> usize {
        self.get_calls()
            .iter()
            .filter(|c| **c == GitCall::HardReset)
            .count()
    }

    /// Branch currently checked out in the mock
    pub fn branch(&self) -> String {
        self.current_branch.lock().unwrap().clone()
    }

    /// Assert that nothing touched refs or the working tree
    pub fn assert_no_mutation(&self) {
        let calls = self.get_calls();
        assert!(
            !calls.iter().any(GitCall::is_mutating),
            "Expected no fetch/checkout/reset but got: {calls:?}"
        );
    }

    /// Assert that `fetch` was called with specific args
    pub fn assert_fetch_called(&self, remote: &str, refspec: &str) {
        let calls = self.get_fetch_calls();
        assert!(
            calls.iter().any(|(r, s)| r == remote && s == refspec),
            "Expected fetch({remote}, {refspec}) but got: {calls:?}"
        );
    }

    fn record(&self, call: GitCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl GitGateway for MockGit {
    fn has_tool(&self) -> bool {
        self.record(GitCall::HasTool);
        *self.has_tool.lock().unwrap()
    }

    fn is_inside_work_tree(&self) -> bool {
        self.record(GitCall::IsInsideWorkTree);
        *self.inside_work_tree.lock().unwrap()
    }

    fn list_remotes(&self) -> Result<Vec<String>> {
        self.record(GitCall::ListRemotes);

        if let Some(msg) = self.error_on_list_remotes.lock().unwrap().as_ref() {
            return Err(injected(&["remote"], msg));
        }

        Ok(self.remotes.lock().unwrap().clone())
    }

    fn current_branch(&self) -> Result<String> {
        self.record(GitCall::CurrentBranch);

        if let Some(msg) = self.error_on_current_branch.lock().unwrap().as_ref() {
            return Err(injected(&["rev-parse", "--abbrev-ref", "HEAD"], msg));
        }

        Ok(self.branch())
    }

    fn fetch(&self, remote: &str, refspec: &str) -> Result<()> {
        self.record(GitCall::Fetch {
            remote: remote.to_string(),
            refspec: refspec.to_string(),
        });

        if let Some(msg) = self.error_on_fetch.lock().unwrap().as_ref() {
            return Err(injected(&["fetch", remote, refspec], msg));
        }

        Ok(())
    }

    fn checkout(&self, branch: &str, force: bool) -> Result<()> {
        self.record(GitCall::Checkout {
            branch: branch.to_string(),
            force,
        });

        if let Some(msg) = self.error_on_checkout.lock().unwrap().as_ref() {
            return Err(injected(&["checkout", branch], msg));
        }

        *self.current_branch.lock().unwrap() = branch.to_string();
        Ok(())
    }

    fn hard_reset_to_head(&self) -> Result<()> {
        self.record(GitCall::HardReset);

        if let Some(msg) = self.error_on_reset.lock().unwrap().as_ref() {
            return Err(injected(&["reset", "--hard", "HEAD"], msg));
        }

        Ok(())
    }
}

/// A reporter event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start(Stage),
    Mode(ExecutionMode),
    Done(Stage),
    Failed(Stage),
    Success(Synced),
}

/// Reporter that records every event in order
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events, in order
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Stages that were started, in order
    pub fn started(&self) -> Vec<Stage> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Start(stage) => Some(stage),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl Reporter for RecordingReporter {
    fn on_stage_start(&self, stage: Stage) {
        self.push(Event::Start(stage));
    }

    fn on_mode_selected(&self, mode: ExecutionMode) {
        self.push(Event::Mode(mode));
    }

    fn on_stage_success(&self, stage: Stage) {
        self.push(Event::Done(stage));
    }

    fn on_stage_failure(&self, failure: &SyncFailure) {
        self.push(Event::Failed(failure.stage()));
    }

    fn on_success(&self, synced: &Synced) {
        self.push(Event::Success(synced.clone()));
    }
}
