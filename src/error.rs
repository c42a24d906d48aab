//! Error types for the file store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Store Error Enum ==
/// Unified error type for file store operations.
///
/// These errors never cross the public API boundary: the store absorbs them
/// into `None`/`false` results and logs the cause. They exist so internal
/// helpers can propagate failures with `?` instead of catch-and-discard.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File content was not valid JSON, or a value failed to serialize
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the file store.
pub type Result<T> = std::result::Result<T, StoreError>;
