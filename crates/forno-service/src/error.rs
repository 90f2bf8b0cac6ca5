//! # API Error Type
//!
//! Unified error shape handed to the UI layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in Forno POS                             │
//! │                                                                         │
//! │  UI                           Rust Backend                              │
//! │  ──                           ────────────                              │
//! │                                                                         │
//! │  counter.commit_order(...)                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Counter method                                                  │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Input rejected? ──── ValidationError ──────────┐               │  │
//! │  │         │                                       │               │  │
//! │  │         ▼                                       ▼               │  │
//! │  │  Commit rejected? ─── CommitError ─────────── ApiError ────────►│  │
//! │  │         │                                       ▲               │  │
//! │  │         ▼                                       │               │  │
//! │  │  Store failed? ────── CartError / DbError ──────┘               │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "UNKNOWN_SIZE", "message": "Unknown pizza size: gigantic" } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store-level failures (file I/O, SQL) surface a generic `PERSISTENCE`
//! message to the UI; the actual cause is logged, never shown.

use serde::Serialize;
use thiserror::Error;

use crate::commit::CommitError;
use crate::reports::ReportError;
use forno_cart::CartError;
use forno_core::error::ValidationError;
use forno_db::DbError;

/// API error returned from counter operations.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INCOMPLETE_CUSTOMER",
///   "message": "Customer phone is required"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (bad size token, non-positive quantity, ...)
    ValidationError,

    /// Commit attempted with no staged lines
    EmptyCart,

    /// A required customer field was missing
    IncompleteCustomer,

    /// A staged line referenced a size the catalog does not price
    UnknownSize,

    /// A durable store failed (buffer file or sales ledger)
    Persistence,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a generic persistence error. The real cause must already
    /// have been logged by the caller.
    pub fn persistence() -> Self {
        ApiError::new(ErrorCode::Persistence, "A storage operation failed")
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        tracing::error!(error = %err, "Staging buffer operation failed");
        ApiError::persistence()
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        tracing::error!(error = %err, "Sales ledger operation failed");
        ApiError::persistence()
    }
}

impl From<CommitError> for ApiError {
    fn from(err: CommitError) -> Self {
        match err {
            CommitError::EmptyCart => ApiError::new(ErrorCode::EmptyCart, err.to_string()),
            CommitError::IncompleteCustomer { .. } => {
                ApiError::new(ErrorCode::IncompleteCustomer, err.to_string())
            }
            CommitError::UnknownSize(_) => ApiError::new(ErrorCode::UnknownSize, err.to_string()),
            CommitError::AmountOverflow => ApiError::validation(err.to_string()),
            CommitError::Cart(e) => e.into(),
            CommitError::Ledger(e) => e.into(),
        }
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::InvalidWindow(_) => ApiError::validation(err.to_string()),
            ReportError::Ledger(e) => e.into(),
        }
    }
}
