//! # forno-cart: The Pending-Order Staging Buffer
//!
//! File-as-database for the cart: an ordered sequence of [`StagedLine`]
//! records persisted as plain text, one record per line. The file is the
//! sole source of truth for the current cart — the in-memory view is
//! rebuilt from disk before every read, which is what makes a crash leave
//! a line either fully appended or absent.
//!
//! ## Record Format
//! ```text
//! size|quantity|ingredient1,ingredient2,...
//!
//! medium|2|cheese,olives
//! small|1|                      ← empty ingredient list
//! large|3|ham,ham,mushrooms     ← duplicates allowed
//! ```
//!
//! A record with fewer than three segments is skipped with a warning on
//! load; this is documented behavior, not an error. The format must stay
//! byte-compatible with existing staged data.
//!
//! ## Modules
//!
//! - [`codec`] - encode/decode of one record line
//! - [`store`] - the durable buffer: load / append / remove_at / clear,
//!   plus the exclusive lock commits hold across their whole run
//! - [`error`] - buffer error types
//!
//! [`StagedLine`]: forno_core::types::StagedLine

pub mod codec;
pub mod error;
pub mod store;

pub use error::{CartError, CartResult};
pub use store::{PendingOrderStore, StoreGuard};
