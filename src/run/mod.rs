//! Execution pipeline: discovery, registration, and the spawn engine

pub mod engine;
mod reporter;

// Re-export public types
pub use engine::{FileOutcome, FileStatus, RunSummary};

use crate::discover;
use crate::error::Result;
use crate::harness::Harness;
use std::path::Path;

/// Discover test files under `tests_root` and run them on `harness`
///
/// Every file under `tests_root` whose name ends in
/// [`crate::discover::TEST_FILE_SUFFIX`] is registered with the harness,
/// joined onto `tests_root` in the order the search yields them, and then
/// the whole registration list is executed.
///
/// Returns exactly once. `Err` is produced only by a failed search, before
/// anything is registered. Once registration happens the run always completes
/// with `Ok(())`: per-file failures are reported by the harness reporter and
/// recorded in [`Harness::summary`], not surfaced here.
pub fn run(harness: &mut Harness, tests_root: impl AsRef<Path>) -> Result<()> {
    let tests_root = tests_root.as_ref();

    let files = discover::discover_files(tests_root)?;

    for file in files {
        harness.add_file(tests_root.join(file));
    }

    harness.execute();
    Ok(())
}
