//! # forno-db: Sales Ledger for Forno POS
//!
//! This crate provides the permanent, append-only store of committed sales.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Forno POS Data Flow                              │
//! │                                                                         │
//! │  OrderCommitService (forno-service)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     forno-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │ SaleRepository│    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │   (sale.rs)   │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ insert_order  │    │ 001_initial_ │  │   │
//! │  │   │ WAL mode      │    │ sales_between │    │ schema.sql   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite: sales 1─N sale_details 1─N detail_ingredients                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The sale repository (atomic insert, window queries)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forno_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/forno.db")).await?;
//! let sale = db.sales().insert_order(&customer, &priced_order).await?;
//! let today = db.sales().sales_between(start_utc, end_utc).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::sale::SaleRepository;
