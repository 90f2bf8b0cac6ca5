//! # Database Error Types
//!
//! Error types for sales-ledger operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CommitError::Ledger / ApiError (forno-service)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI layer displays a user-friendly message; the staged cart is kept    │
//! │  so the customer can retry                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Failures raised by the sales ledger.
///
/// Raw sqlx errors are folded into these variants so callers can
/// react to the category without parsing driver messages.
#[derive(Debug, Error)]
pub enum DbError {
    /// No row matched the requested identity.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A CHECK, UNIQUE, or foreign key constraint rejected a write.
    ///
    /// ## When This Occurs
    /// - A staged line with a non-positive quantity reaches the ledger
    /// - A detail or ingredient references a missing parent row
    ///
    /// The surrounding transaction rolls back whole: no partial
    /// Sale/Detail/Ingredient rows survive.
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    /// The ledger file could not be opened or the pool could not
    /// connect (missing directory, permissions, disk full).
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A schema migration did not apply.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A statement failed for a reason other than a constraint.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Every pooled connection was busy past the acquire timeout.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Anything sqlx reports that has no more specific mapping.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Shorthand for a NotFound over an entity name and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Folds a raw sqlx error into a DbError variant.
///
/// RowNotFound becomes NotFound, driver errors whose message names a
/// constraint become ConstraintViolation (other driver errors become
/// QueryFailed), pool timeouts become PoolExhausted, and everything
/// else lands in Internal.
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                //   "CHECK constraint failed: <expr>"
                //   "UNIQUE constraint failed: <table>.<column>"
                //   "FOREIGN KEY constraint failed"
                if msg.contains("constraint failed") {
                    DbError::ConstraintViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result alias used throughout the ledger crate.
pub type DbResult<T> = Result<T, DbError>;
