//! # Staging Buffer Error Types

use thiserror::Error;

/// Errors from the pending-order buffer.
///
/// Malformed records are NOT an error: they are skipped with a warning on
/// load. Only the underlying file I/O can fail.
#[derive(Debug, Error)]
pub enum CartError {
    /// Reading, appending, or rewriting the buffer file failed.
    #[error("Cart buffer I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for staging buffer operations.
pub type CartResult<T> = Result<T, CartError>;
