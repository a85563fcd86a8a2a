//! Error types for the interpreter.
//!
//! Player mistakes are never errors; they become narration. What reaches
//! this type is a broken content dataset or a failing console.

use thiserror::Error;

/// Result type for interpreter operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Faults that end a session abnormally.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The content dataset or world state violated its contract.
    #[error(transparent)]
    Core(#[from] cave_core::CoreError),

    /// Reading or writing the console failed.
    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
}
