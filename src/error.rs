//! Error types for scenegeom

use thiserror::Error;

/// Main error type for scenegeom operations
///
/// Every failure is detected synchronously at the point of construction or
/// operation and propagates to the caller as a value; the core never logs,
/// retries, or leaves partially built state behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{context} takes {expected}, got {got}")]
    InvalidArity {
        context: &'static str,
        expected: &'static str,
        got: usize,
    },

    #[error("vertex index {index} out of range for pool of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    #[error("unrecognized style option: {0}")]
    UnrecognizedOption(String),
}

/// Result type alias for scenegeom operations
pub type Result<T> = std::result::Result<T, Error>;
