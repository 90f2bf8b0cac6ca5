//! # Error Types
//!
//! Domain-specific error types for forno-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  forno-core errors (this file)                                         │
//! │  ├── CoreError        - Pricing/domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  forno-cart errors (separate crate)                                    │
//! │  └── CartError        - Staging buffer I/O failures                    │
//! │                                                                         │
//! │  forno-db errors (separate crate)                                      │
//! │  └── DbError          - Ledger operation failures                      │
//! │                                                                         │
//! │  forno-service errors                                                   │
//! │  ├── CommitError      - Typed commit pipeline outcomes                 │
//! │  └── ApiError         - What the UI layer sees (serialized)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending size, field name)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They are recovered at
/// the service boundary and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A staged line references a size that is not a catalog key.
    ///
    /// ## When This Occurs
    /// - A hand-edited or legacy staging buffer carries a size the current
    ///   catalog does not price
    /// - The catalog was reconfigured after lines were staged
    ///
    /// This is a hard error at pricing time: the order is never partially
    /// priced or silently defaulted.
    #[error("Unknown pizza size: {0}")]
    UnknownSize(String),

    /// A subtotal or total left the representable cent range.
    ///
    /// Only a hand-edited staging buffer can carry quantities large
    /// enough to reach this: the counter caps staged quantities at
    /// [`crate::MAX_LINE_QUANTITY`].
    #[error("Order amount out of range")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty after trimming.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a token carrying buffer delimiter characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
