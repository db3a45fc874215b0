//! git-prout CLI entry point

mod cli;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use cli::{OutputOptions, run_checkout};
use git_prout::exit::ExitStatus;
use git_prout::git::SystemGit;
use git_prout::sync::SyncRequest;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "git-prout")]
#[command(
    version,
    about = "Checkout or update a pull request branch from a git remote",
    after_help = "EXAMPLES:
    git-prout 123              # Fetch PR #123 from origin and switch to pr/123
    git-prout 123              # Run again on pr/123 to update it to the latest head
    git-prout -r upstream 42   # Use the 'upstream' remote
    git-prout -f 42            # Discard local changes that block the checkout"
)]
struct Cli {
    /// ID number of pull request
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    number: u64,

    /// Reference of remote
    #[arg(short, long, default_value = "origin")]
    remote: String,

    /// Force execute pull or checkout
    #[arg(short, long)]
    force: bool,

    /// Silence any progress and errors (other than parse error)
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn request(&self) -> SyncRequest {
        SyncRequest::new(&self.remote, self.number, self.force)
    }

    const fn output(&self) -> OutputOptions {
        OutputOptions {
            quiet: self.quiet,
            debug: self.debug,
        }
    }
}

/// Install the stderr log subscriber
///
/// `--debug` forces debug output for this crate; otherwise `RUST_LOG` applies.
fn init_logging(output: OutputOptions) -> anyhow::Result<()> {
    let filter = if output.debug {
        EnvFilter::new("git_prout=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .compact(),
        )
        .try_init()
        .context("failed to install log subscriber")
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let status = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitStatus::Ok,
                _ => ExitStatus::ParseFlagsError,
            };
            // Nothing left to report if stderr is gone
            e.print().ok();
            return status.into();
        }
    };

    let output = cli.output();
    if let Err(e) = init_logging(output) {
        anstream::eprintln!("warning: {e:#}");
    }
    if output.debug {
        tracing::debug!("debug mode enabled");
    }

    let git = SystemGit::new();
    run_checkout(&git, &cli.request(), output).into()
}
