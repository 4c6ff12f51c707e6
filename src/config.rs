//! Harness configuration

use regex::Regex;
use termcolor::ColorChoice;

/// Interface dialect announced to spawned test files.
///
/// The value is exported to each child process as `TESTRUNNER_UI` so the
/// file's own test framework can pick the matching DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceStyle {
    Tdd,
    Bdd,
    Exports,
    Qunit,
}

impl InterfaceStyle {
    /// The lowercase name exported to spawned files
    pub fn as_str(self) -> &'static str {
        match self {
            InterfaceStyle::Tdd => "tdd",
            InterfaceStyle::Bdd => "bdd",
            InterfaceStyle::Exports => "exports",
            InterfaceStyle::Qunit => "qunit",
        }
    }
}

/// Color output toggle for the reporter and spawned files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Colorize when stdout is a terminal
    Auto,
    /// Always colorize
    On,
    /// Never colorize
    Off,
}

impl ColorMode {
    /// Whether color is in effect for the current process
    pub(crate) fn enabled(self) -> bool {
        match self {
            ColorMode::On => true,
            ColorMode::Off => false,
            ColorMode::Auto => atty::is(atty::Stream::Stdout),
        }
    }

    /// Map to the reporter's color choice
    pub(crate) fn color_choice(self) -> ColorChoice {
        match self {
            ColorMode::On => ColorChoice::Always,
            ColorMode::Off => ColorChoice::Never,
            ColorMode::Auto => {
                if atty::is(atty::Stream::Stdout) {
                    ColorChoice::Auto
                } else {
                    ColorChoice::Never
                }
            }
        }
    }
}

/// Configuration for a harness instance
///
/// Mirrors the option surface of the spawned-file harness with named fields
/// instead of an untyped bag. A fresh [`crate::Harness`] built from one of
/// these replaces whatever instance the caller held before; configuration is
/// never merged between instances.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Interface dialect announced to spawned files
    pub ui: InterfaceStyle,
    /// Color output toggle
    pub color: ColorMode,
    /// Stop executing after the first failing file
    pub bail: bool,
    /// When set, only registered files whose path matches are executed
    pub grep: Option<Regex>,
    /// Argv prefix used to spawn each file; the file path is appended last
    pub interpreter: Vec<String>,
}

impl HarnessConfig {
    /// Create a new HarnessConfig with default settings
    pub fn new() -> Self {
        // Honor the NO_COLOR convention unless the caller overrides it
        let color = if std::env::var_os("NO_COLOR").is_some() {
            ColorMode::Off
        } else {
            ColorMode::Auto
        };

        HarnessConfig {
            ui: InterfaceStyle::Tdd,
            color,
            bail: false,
            grep: None,
            interpreter: vec!["node".to_string()],
        }
    }

    /// Set the interface dialect
    pub fn ui(mut self, ui: InterfaceStyle) -> Self {
        self.ui = ui;
        self
    }

    /// Set the color mode
    pub fn color(mut self, mode: ColorMode) -> Self {
        self.color = mode;
        self
    }

    /// Set whether to stop after the first failing file
    pub fn bail(mut self, bail: bool) -> Self {
        self.bail = bail;
        self
    }

    /// Restrict execution to registered files whose path matches `pattern`
    ///
    /// Registration itself is unaffected; filtered files simply do not run.
    pub fn grep(mut self, pattern: Regex) -> Self {
        self.grep = Some(pattern);
        self
    }

    /// Set the interpreter argv used to spawn each registered file
    pub fn interpreter<I, S>(mut self, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interpreter = argv.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new()
    }
}
