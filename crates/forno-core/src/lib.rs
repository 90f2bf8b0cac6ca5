//! # forno-core: Pure Business Logic for Forno POS
//!
//! This crate is the **heart** of the pizza-counter order pipeline. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Forno POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Layer (out of scope)                      │   │
//! │  │    Order form ──► Cart view ──► Checkout ──► Sales report      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 forno-service (Counter facade)                   │   │
//! │  │    add_line, remove_line, commit_order, sales_report            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ forno-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │  pricing  │  │   │
//! │  │   │StagedLine │  │   Money   │  │  Catalog  │  │price_line │  │   │
//! │  │   │   Sale    │  │  (cents)  │  │ base+extra│  │price_order│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO FILE SYSTEM • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌──────────────────┐  ┌──────▼──────────────────────────────────┐    │
//! │  │   forno-cart     │  │   forno-db (SQLite sales ledger)        │    │
//! │  │  (staging file)  │  │   atomic Sale+Detail+Ingredient insert  │    │
//! │  └──────────────────┘  └─────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (StagedLine, CustomerInfo, Sale, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Pricing table: size → base price + ingredient surcharge
//! - [`pricing`] - Pure per-line and per-order subtotal computation
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use forno_core::catalog::Catalog;
//! use forno_core::pricing::price_line;
//!
//! let catalog = Catalog::standard();
//!
//! // A medium pizza with two ingredients, twice:
//! // (8000 + 2 × 1000) × 2 = 20000 cents
//! let subtotal = price_line(&catalog, "medium", 2, 2).unwrap();
//! assert_eq!(subtotal.cents(), 20_000);
//! ```

// =============================================================================
// Business Constants
// =============================================================================

/// Maximum quantity of a single staged line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10)
/// and keeps subtotal arithmetic far away from the i64 cent range.
pub const MAX_LINE_QUANTITY: i64 = 999;

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use forno_core::Money` instead of
// `use forno_core::money::Money`

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{price_line, price_order, PricedLine, PricedOrder};
pub use types::*;
