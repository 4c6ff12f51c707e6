//! Spawns registered test files through the configured interpreter

use crate::config::HarnessConfig;
use crate::run::reporter::Reporter;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

/// Outcome of executing a single registered file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// The path as it was registered
    pub path: PathBuf,
    /// Whether the file's test run passed
    pub status: FileStatus,
    /// Wall-clock time spent on this file
    pub duration: Duration,
}

/// Pass/fail state of a single file's test run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Passed,
    Failed {
        /// Exit status, or the spawn error if the file never ran
        detail: String,
    },
}

impl FileStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, FileStatus::Failed { .. })
    }
}

/// Aggregate outcome of one execution pass over the registration list
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Per-file outcomes, in execution order
    pub outcomes: Vec<FileOutcome>,
    /// Wall-clock time for the whole pass
    pub duration: Duration,
}

impl RunSummary {
    /// Number of files whose test run passed
    pub fn passed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == FileStatus::Passed)
            .count()
    }

    /// Number of files whose test run failed
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Whether every executed file passed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Execute `files` in order under `config`, reporting as each one finishes
///
/// Per-file failures are recorded in the summary, never returned: the engine
/// always runs to completion (or to the first failure when `bail` is set).
pub(crate) fn execute_files(config: &HarnessConfig, files: &[PathBuf]) -> RunSummary {
    let colors = config.color.enabled();
    let mut reporter = Reporter::new(config.color.color_choice());

    let started = Instant::now();
    let mut outcomes = Vec::new();

    for path in files {
        if let Some(grep) = &config.grep {
            if !grep.is_match(&path.to_string_lossy()) {
                continue;
            }
        }

        let outcome = run_file(config, path, colors);
        reporter.file_finished(&outcome);

        let failed = outcome.status.is_failed();
        outcomes.push(outcome);

        if failed && config.bail {
            break;
        }
    }

    let summary = RunSummary {
        outcomes,
        duration: started.elapsed(),
    };
    reporter.run_finished(&summary);
    summary
}

/// Spawn one file through the interpreter and wait for it
///
/// The child inherits stdio, so the file's own test output streams straight
/// to the console. The harness only interprets the exit status: success means
/// the file passed, anything else (including a failed spawn) is a failure.
fn run_file(config: &HarnessConfig, path: &Path, colors: bool) -> FileOutcome {
    let started = Instant::now();

    let mut argv = config.interpreter.iter();
    let program = match argv.next() {
        Some(program) => program,
        None => {
            return FileOutcome {
                path: path.to_path_buf(),
                status: FileStatus::Failed {
                    detail: "interpreter command is empty".to_string(),
                },
                duration: started.elapsed(),
            };
        }
    };

    let mut command = Command::new(program);
    command.args(argv).arg(path);
    command.env("TESTRUNNER_UI", config.ui.as_str());
    if colors {
        command.env("FORCE_COLOR", "1").env_remove("NO_COLOR");
    } else {
        command.env("NO_COLOR", "1").env_remove("FORCE_COLOR");
    }

    let status = match command.status() {
        Ok(status) if status.success() => FileStatus::Passed,
        Ok(status) => FileStatus::Failed {
            detail: status.to_string(),
        },
        Err(e) => FileStatus::Failed {
            detail: format!("failed to launch '{}': {}", program, e),
        },
    };

    FileOutcome {
        path: path.to_path_buf(),
        status,
        duration: started.elapsed(),
    }
}
