//! # testrunner-rs
//!
//! A Rust crate for discovering test files on disk and driving them through a
//! spawned-process harness.
//!
//! The crate is deliberately thin glue: it finds every file under a root
//! directory whose name ends in `.test.js`, registers each one with a
//! configured [`Harness`], spawns them through an interpreter, and reports
//! completion. Whether the tests inside a file pass is the spawned file's own
//! business: the run completes successfully as long as discovery succeeded
//! and every file was driven, and aggregate pass/fail lives in
//! [`Harness::summary`].

pub mod config;
pub mod discover;
pub mod error;
pub mod harness;
pub mod run;

pub use config::{ColorMode, HarnessConfig, InterfaceStyle};
pub use error::{Error, Result};
pub use harness::Harness;
pub use run::{FileOutcome, FileStatus, RunSummary};

// Re-export so callers can build grep filters without a separate regex dependency
pub use regex::Regex;

/// Builder for configuring and running a test harness
///
/// This provides a fluent interface for constructing a fresh [`Harness`] and
/// optionally driving it in one call. Building a new harness always starts
/// from an empty registration list; it never inherits files from a previous
/// instance.
///
/// # Examples
///
/// ```no_run
/// use testrunner_rs::{testrunner, ColorMode, InterfaceStyle, Regex};
///
/// // Simple usage: run every *.test.js under ./suite with the defaults
/// let harness = testrunner::run("suite").unwrap();
///
/// // With customization
/// let harness = testrunner::configure()
///     .ui(InterfaceStyle::Bdd)
///     .color(ColorMode::Off)
///     .bail(true)
///     .grep(Regex::new("smoke").unwrap())
///     .run("suite")
///     .unwrap();
///
/// // Aggregate pass/fail travels through the summary, not the run result
/// if !harness.summary().map_or(true, |s| s.is_success()) {
///     std::process::exit(1);
/// }
/// ```
pub struct Builder {
    config: HarnessConfig,
}

impl Builder {
    /// Create a new builder with default settings
    fn new() -> Self {
        Self {
            config: HarnessConfig::new(),
        }
    }

    /// Set the interface dialect announced to spawned files
    pub fn ui(mut self, ui: InterfaceStyle) -> Self {
        self.config = self.config.ui(ui);
        self
    }

    /// Set the color output mode
    pub fn color(mut self, mode: ColorMode) -> Self {
        self.config = self.config.color(mode);
        self
    }

    /// Stop executing after the first failing file
    pub fn bail(mut self, bail: bool) -> Self {
        self.config = self.config.bail(bail);
        self
    }

    /// Only execute registered files whose path matches `pattern`
    pub fn grep(mut self, pattern: Regex) -> Self {
        self.config = self.config.grep(pattern);
        self
    }

    /// Set the interpreter argv used to spawn each registered file
    pub fn interpreter<I, S>(mut self, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config = self.config.interpreter(argv);
        self
    }

    /// Construct the harness without running anything
    pub fn build(self) -> Harness {
        Harness::new(self.config)
    }

    /// Construct the harness, then discover and run files under `tests_root`
    ///
    /// Returns the harness so the registration list and run summary stay
    /// inspectable. See [`run::run`] for the completion contract.
    pub fn run(self, tests_root: impl AsRef<std::path::Path>) -> Result<Harness> {
        let mut harness = self.build();
        run::run(&mut harness, tests_root)?;
        Ok(harness)
    }
}

/// Main entry points for configuring and running test files
///
/// # Examples
///
/// ```no_run
/// use testrunner_rs::testrunner;
///
/// // Run all test files under the suite directory
/// testrunner::run("suite").unwrap();
/// ```
pub mod testrunner {
    use super::*;

    /// Create a builder for a fresh harness
    pub fn configure() -> Builder {
        Builder::new()
    }

    /// Discover and run test files under `tests_root` with a default harness
    pub fn run(tests_root: impl AsRef<std::path::Path>) -> Result<Harness> {
        Builder::new().run(tests_root)
    }
}
