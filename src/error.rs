//! Errors for rejected run requests.

use thiserror::Error;

/// Command-line input that cannot start a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// The pattern name is not in the catalog.
    #[error("unknown pattern: {0:?}")]
    UnknownPattern(String),

    /// The iteration count is not a non-negative integer.
    #[error("invalid iteration count: {0:?}")]
    InvalidIterations(String),
}
