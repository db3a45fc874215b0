//! CLI layer: terminal reporting and command execution

mod checkout;
mod style;

pub use checkout::run_checkout;

use anstream::{eprintln, println};
use git_prout::sync::{Reporter, SyncFailure, Synced};
use git_prout::types::{ExecutionMode, Stage};
use indicatif::ProgressBar;
use std::cell::{Cell, RefCell};
use std::time::Duration;
use style::{SPARKLES, Stylize, check, spinner_style};

/// Output settings taken from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Suppress spinners, success text and error text
    pub quiet: bool,
    /// Emit debug logs and full error chains
    pub debug: bool,
}

/// Spinner text for a phase: (in progress, finished)
///
/// The first three stages share one "Checking" phase.
const fn phase_labels(stage: Stage, mode: Option<ExecutionMode>) -> (&'static str, &'static str) {
    match (stage, mode) {
        (Stage::EnvironmentCheck | Stage::RemoteValidation | Stage::BranchDetection, _) => {
            ("Checking", "Checked")
        }
        (Stage::Fetch, _) => ("Fetching", "Fetched"),
        (Stage::Apply, Some(ExecutionMode::Update)) => ("Updating", "Updated"),
        (Stage::Apply, _) => ("Checking out", "Checked out"),
    }
}

/// Reporter that draws one spinner per phase and prints the final result
pub struct CliReporter {
    quiet: bool,
    spinner: RefCell<Option<ProgressBar>>,
    mode: Cell<Option<ExecutionMode>>,
}

impl CliReporter {
    /// Create a reporter; `quiet` suppresses all output
    pub const fn new(quiet: bool) -> Self {
        Self {
            quiet,
            spinner: RefCell::new(None),
            mode: Cell::new(None),
        }
    }

    fn start_spinner(&self, message: &str) {
        if self.quiet {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(format!("{message}..."));
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn finish_spinner(&self, message: &str) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_with_message(format!("{} {}", check(), message.success()));
        }
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Reporter for CliReporter {
    fn on_stage_start(&self, stage: Stage) {
        // One spinner covers the whole "Checking" phase
        if matches!(stage, Stage::EnvironmentCheck | Stage::Fetch | Stage::Apply) {
            let (running, _) = phase_labels(stage, self.mode.get());
            self.start_spinner(running);
        }
    }

    fn on_mode_selected(&self, mode: ExecutionMode) {
        self.mode.set(Some(mode));
    }

    fn on_stage_success(&self, stage: Stage) {
        if matches!(stage, Stage::BranchDetection | Stage::Fetch | Stage::Apply) {
            let (_, done) = phase_labels(stage, self.mode.get());
            self.finish_spinner(done);
        }
    }

    fn on_stage_failure(&self, failure: &SyncFailure) {
        self.clear_spinner();
        if !self.quiet {
            eprintln!("{}", format!("Error: {failure}").error_banner());
        }
    }

    fn on_success(&self, synced: &Synced) {
        if self.quiet {
            return;
        }
        let message = match synced.mode {
            ExecutionMode::Update => format!("Updated a '{}' branch.", synced.branch.accent()),
            ExecutionMode::Checkout => {
                format!("Switched to a '{}' branch.", synced.branch.accent())
            }
        };
        println!("\n{SPARKLES} {}", "Done!".success());
        println!("{message}");
    }
}
