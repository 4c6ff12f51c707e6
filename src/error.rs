//! Error types for testrunner-rs

use thiserror::Error;

/// Result type alias for runner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for runner operations
///
/// Only the discovery phase produces errors: execution-phase failures are
/// recorded per file in the run summary instead of surfacing here.
#[derive(Error, Debug)]
pub enum Error {
    /// WalkDir error during discovery
    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}
