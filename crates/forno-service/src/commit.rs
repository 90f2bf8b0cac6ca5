//! # Order Commit Pipeline
//!
//! Turns the staged buffer into one permanent sale: load, validate,
//! price, persist, clear — in that order, under one buffer lock.
//!
//! ## Failure Behavior
//! Every failure before step 5 leaves both stores untouched. A failure
//! inside step 5 rolls the SQL transaction back, and the buffer is left
//! as it was, so the cashier can fix the problem and retry.
//!
//! The single ordering that must never be violated: the buffer is
//! cleared only AFTER the ledger transaction has committed. A crash
//! between the two leaves the order both persisted and staged, which a
//! human can resolve; the reverse (cleared but not persisted) loses the
//! sale silently.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use forno_cart::{CartError, PendingOrderStore};
use forno_core::catalog::Catalog;
use forno_core::error::{CoreError, ValidationError};
use forno_core::pricing::price_order;
use forno_core::types::CustomerInfo;
use forno_core::validation::validate_customer;
use forno_db::{DbError, SaleRepository};

// =============================================================================
// Errors
// =============================================================================

/// Why a commit was rejected or failed.
#[derive(Debug, Error)]
pub enum CommitError {
    /// The staging buffer held no lines. Nothing was written.
    #[error("Cannot commit an empty order")]
    EmptyCart,

    /// A required customer field was missing or blank.
    #[error("Customer {field} is required")]
    IncompleteCustomer { field: String },

    /// A staged line referenced a size the catalog does not price.
    /// The whole commit fails; no partial order is persisted.
    #[error("Unknown pizza size: {0}")]
    UnknownSize(String),

    /// Pricing left the representable amount range. Staged quantities
    /// are capped well below this, so only a hand-edited buffer can
    /// trigger it.
    #[error("Order amount out of range")]
    AmountOverflow,

    /// The staging buffer could not be read or cleared.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The sales ledger rejected or failed the transaction.
    #[error(transparent)]
    Ledger(#[from] DbError),
}

impl From<CoreError> for CommitError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownSize(size) => CommitError::UnknownSize(size),
            CoreError::AmountOverflow => CommitError::AmountOverflow,
            CoreError::Validation(ValidationError::Required { field }) => {
                CommitError::IncompleteCustomer { field }
            }
            // Other validation failures also read as incomplete input here.
            CoreError::Validation(e) => CommitError::IncompleteCustomer {
                field: e.to_string(),
            },
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// What the UI gets back from a successful commit.
///
/// ## Serialization
/// ```json
/// {
///   "saleId": "a1b2c3...",
///   "totalCents": 20000,
///   "lineCount": 2
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitReceipt {
    /// Ledger id of the persisted sale.
    pub sale_id: String,

    /// Grand total charged, in cents.
    pub total_cents: i64,

    /// Number of pizza lines the sale contained.
    pub line_count: usize,
}

// =============================================================================
// Commit Service
// =============================================================================

/// Orchestrates the staging buffer, the pricing catalog, and the sales
/// ledger into one atomic commit operation.
#[derive(Debug, Clone)]
pub struct OrderCommitService {
    store: Arc<PendingOrderStore>,
    catalog: Catalog,
    sales: SaleRepository,
}

impl OrderCommitService {
    pub fn new(store: Arc<PendingOrderStore>, catalog: Catalog, sales: SaleRepository) -> Self {
        OrderCommitService {
            store,
            catalog,
            sales,
        }
    }

    /// Commits the entire staged buffer as one sale for `customer`.
    ///
    /// Holds the buffer lock for the whole pipeline: the snapshot that is
    /// priced is exactly the snapshot that is persisted and cleared, with
    /// no interleaved appends or removals.
    pub async fn commit(&self, customer: &CustomerInfo) -> Result<CommitReceipt, CommitError> {
        let guard = self.store.lock().await;

        let staged = guard.load()?;
        if staged.is_empty() {
            return Err(CommitError::EmptyCart);
        }

        let customer = validate_customer(customer).map_err(CoreError::from)?;
        let order = price_order(&self.catalog, &staged)?;

        let sale = self.sales.insert_order(&customer, &order).await?;

        // The transaction is committed; the staged lines are now permanent.
        // A clear failure past this point must not fail the commit — the
        // sale exists. The stale buffer is re-reported on the next commit
        // attempt, never lost.
        if let Err(e) = guard.clear() {
            warn!(sale_id = %sale.id, error = %e, "Buffer clear failed after commit");
        }

        info!(
            sale_id = %sale.id,
            total_cents = sale.total_cents,
            lines = order.line_count(),
            "Order committed"
        );

        Ok(CommitReceipt {
            sale_id: sale.id,
            total_cents: sale.total_cents,
            line_count: order.line_count(),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use forno_core::types::StagedLine;
    use forno_db::{Database, DbConfig};
    use tempfile::TempDir;

    async fn test_service(dir: &TempDir) -> (OrderCommitService, Arc<PendingOrderStore>, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = Arc::new(PendingOrderStore::new(dir.path().join("pedidos.txt")));
        let service = OrderCommitService::new(store.clone(), Catalog::standard(), db.sales());
        (service, store, db)
    }

    fn customer() -> CustomerInfo {
        CustomerInfo::new("Ana Torres", "12 Oak Street", "555-0101")
    }

    #[tokio::test]
    async fn test_commit_persists_and_clears_buffer() {
        let dir = TempDir::new().unwrap();
        let (service, store, db) = test_service(&dir).await;

        store
            .append(&StagedLine::new(
                "medium",
                2,
                vec!["cheese".into(), "olives".into()],
            ))
            .await
            .unwrap();
        store.append(&StagedLine::new("small", 1, vec![])).await.unwrap();

        let receipt = service.commit(&customer()).await.unwrap();

        // (8000 + 2×1000) × 2 + 4000 = 24000
        assert_eq!(receipt.total_cents, 24_000);
        assert_eq!(receipt.line_count, 2);

        // The sale is in the ledger and the buffer is empty
        let sale = db.sales().get_by_id(&receipt.sale_id).await.unwrap();
        assert!(sale.is_some());
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_commit_empty_buffer_is_rejected() {
        let dir = TempDir::new().unwrap();
        let (service, _store, db) = test_service(&dir).await;

        let err = service.commit(&customer()).await.unwrap_err();
        assert!(matches!(err, CommitError::EmptyCart));
        assert_eq!(db.sales().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_commit_incomplete_customer_preserves_buffer() {
        let dir = TempDir::new().unwrap();
        let (service, store, db) = test_service(&dir).await;

        store.append(&StagedLine::new("small", 1, vec![])).await.unwrap();

        let missing_phone = CustomerInfo::new("Ana Torres", "12 Oak Street", "   ");
        let err = service.commit(&missing_phone).await.unwrap_err();

        assert!(matches!(
            err,
            CommitError::IncompleteCustomer { ref field } if field == "phone"
        ));
        assert_eq!(db.sales().count().await.unwrap(), 0);
        assert_eq!(store.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_commit_unknown_size_fails_whole_order() {
        let dir = TempDir::new().unwrap();
        let (service, store, db) = test_service(&dir).await;

        store.append(&StagedLine::new("small", 1, vec![])).await.unwrap();
        store.append(&StagedLine::new("gigantic", 1, vec![])).await.unwrap();

        let err = service.commit(&customer()).await.unwrap_err();

        assert!(matches!(err, CommitError::UnknownSize(ref s) if s == "gigantic"));
        // Nothing persisted, nothing cleared — not even the valid line
        assert_eq!(db.sales().count().await.unwrap(), 0);
        assert_eq!(store.load().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_commit_absurd_quantity_errors_instead_of_wrapping() {
        let dir = TempDir::new().unwrap();
        let (service, store, db) = test_service(&dir).await;

        // Write raw records directly: the counter caps quantities, but a
        // hand-edited buffer can stage a quantity that would overflow the
        // subtotal arithmetic. The commit must reject it, never wrap.
        std::fs::write(store.path(), format!("small|{}|\n", i64::MAX)).unwrap();

        let err = service.commit(&customer()).await.unwrap_err();

        assert!(matches!(err, CommitError::AmountOverflow));
        assert_eq!(db.sales().count().await.unwrap(), 0);
        assert_eq!(store.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_transaction_rolls_back_and_keeps_buffer() {
        let dir = TempDir::new().unwrap();
        let (service, store, db) = test_service(&dir).await;

        // Write raw records directly: a valid line followed by one whose
        // quantity violates the ledger's CHECK constraint. It prices fine
        // (pricing is pure arithmetic) but fails mid-transaction.
        std::fs::write(store.path(), "medium|1|cheese\nsmall|-1|\n").unwrap();

        let err = service.commit(&customer()).await.unwrap_err();

        assert!(matches!(err, CommitError::Ledger(_)));
        // The transaction rolled back entirely: no sale row survived the
        // failed detail insert, and the buffer is intact for a retry.
        assert_eq!(db.sales().count().await.unwrap(), 0);
        assert_eq!(store.load().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_customer_fields_are_trimmed_before_persist() {
        let dir = TempDir::new().unwrap();
        let (service, store, db) = test_service(&dir).await;

        store.append(&StagedLine::new("large", 1, vec![])).await.unwrap();

        let padded = CustomerInfo::new("  Ana Torres  ", " 12 Oak Street ", " 555-0101 ");
        let receipt = service.commit(&padded).await.unwrap();

        let sale = db
            .sales()
            .get_by_id(&receipt.sale_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(sale.customer_name, "Ana Torres");
        assert_eq!(sale.customer_address, "12 Oak Street");
        assert_eq!(sale.customer_phone, "555-0101");
    }
}
