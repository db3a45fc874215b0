//! PR sync workflow
//!
//! Five stages run in strict order, each a precondition for the next:
//! 1. Environment check - git installed, inside a work tree
//! 2. Remote validation - requested remote exists
//! 3. Branch detection - read current branch, pick update or checkout mode
//! 4. Fetch - force-fetch the PR head into `pr/<number>`
//! 5. Apply - hard reset (update) or switch branches (checkout)
//!
//! The first failure ends the run. Nothing is retried or rolled back.

mod outcome;
mod progress;
mod workflow;

pub use outcome::{Outcome, SyncFailure, SyncRequest, Synced};
pub use progress::{NoopReporter, Reporter};
pub use workflow::run_sync;
