//! # Repository Module
//!
//! Database repository implementations for the sales ledger.
//!
//! ## Repository Pattern
//! The repository abstracts ledger access behind a clean API: the commit
//! pipeline calls `db.sales().insert_order(...)` and never sees SQL. One
//! repository is enough here — the ledger has a single aggregate
//! (Sale 1─N SaleDetail 1─N DetailIngredient).
//!
//! ## Available Repositories
//!
//! - [`sale::SaleRepository`] - Atomic order insert, read-back, and
//!   calendar-window queries

pub mod sale;
