//! # forno-service: Order Pipeline Facade
//!
//! The layer the UI talks to. One [`Counter`] value owns the staging
//! buffer, the pricing catalog, and the sales ledger, and exposes the
//! whole order pipeline as a handful of async methods.
//!
//! ## Module Organization
//! ```text
//! forno_service/
//! ├── lib.rs          ◄─── You are here (exports & tracing setup)
//! ├── config.rs       ◄─── Paths and environment overrides
//! ├── counter.rs      ◄─── Counter facade (add/remove/list/commit/report)
//! ├── commit.rs       ◄─── The atomic commit pipeline
//! ├── reports.rs      ◄─── Day/month sales reports
//! └── error.rs        ◄─── API error type for the UI layer
//! ```
//!
//! ## The Commit Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    commit_order(customer)                               │
//! │                                                                         │
//! │  1. Lock the staging buffer ──────────────────────────────────────────► │
//! │     • No append/removal interleaves until the commit finishes           │
//! │                                                                         │
//! │  2. Load the staged lines ────────────────────────────────────────────► │
//! │     • Empty buffer → EMPTY_CART, nothing written                        │
//! │                                                                         │
//! │  3. Validate the customer ────────────────────────────────────────────► │
//! │     • Missing name/address/phone → INCOMPLETE_CUSTOMER                  │
//! │                                                                         │
//! │  4. Price the whole order ────────────────────────────────────────────► │
//! │     • Unknown size anywhere → UNKNOWN_SIZE, whole commit fails          │
//! │                                                                         │
//! │  5. Persist sale + details + ingredients ─────────────────────────────► │
//! │     • One SQL transaction: all rows or none                             │
//! │                                                                         │
//! │  6. Clear the staging buffer ─────────────────────────────────────────► │
//! │     • Only after the transaction committed                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commit;
pub mod config;
pub mod counter;
pub mod error;
pub mod reports;

pub use commit::{CommitError, CommitReceipt, OrderCommitService};
pub use config::Config;
pub use counter::{CartView, CommitOutcome, Counter};
pub use error::{ApiError, ErrorCode};
pub use reports::{ReportError, ReportService, ReportWindow, SalesReport};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=forno=trace` - Show trace for forno crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,forno=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
