//! Harness state: configuration plus the accumulated registration list

use crate::config::HarnessConfig;
use crate::error::Result;
use crate::run::{engine, RunSummary};
use std::path::{Path, PathBuf};

/// One configured test-execution session
///
/// A harness owns its configuration, the list of registered test files, and
/// the summary of its most recent execution pass. Registrations accumulate
/// for the lifetime of the instance; constructing a new harness is the only
/// way to start from an empty list. Callers must serialize runs on a shared
/// instance; there is no internal locking.
pub struct Harness {
    config: HarnessConfig,
    files: Vec<PathBuf>,
    summary: Option<RunSummary>,
}

impl Harness {
    /// Create a harness from the given configuration
    pub fn new(config: HarnessConfig) -> Self {
        Harness {
            config,
            files: Vec::new(),
            summary: None,
        }
    }

    /// The configuration this harness was built with
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Register a test file for execution
    ///
    /// Paths are kept in registration order and are not deduplicated.
    pub fn add_file(&mut self, path: impl Into<PathBuf>) {
        self.files.push(path.into());
    }

    /// The files registered so far, in registration order
    pub fn registered_files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Execute every registered file and record the outcome
    ///
    /// Individual file failures (a non-zero exit, a failed spawn) are
    /// reported and counted in the summary, never returned as errors. A
    /// repeated call re-runs everything registered so far.
    pub fn execute(&mut self) -> &RunSummary {
        let summary = engine::execute_files(&self.config, &self.files);
        self.summary.insert(summary)
    }

    /// Summary of the most recent execution pass, if any
    ///
    /// This is the aggregate pass/fail channel: the runner's completion
    /// result stays silent about test outcomes.
    pub fn summary(&self) -> Option<&RunSummary> {
        self.summary.as_ref()
    }

    /// Discover test files under `tests_root`, register them, and execute
    ///
    /// See [`crate::run::run`] for the full contract.
    pub fn run(&mut self, tests_root: impl AsRef<Path>) -> Result<()> {
        crate::run::run(self, tests_root)
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(HarnessConfig::new())
    }
}
