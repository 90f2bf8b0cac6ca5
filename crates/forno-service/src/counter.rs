//! # Counter Facade
//!
//! The single entry point the UI layer holds. One [`Counter`] owns the
//! staging buffer, the catalog, and the database connection, and exposes
//! the whole pipeline: stage lines, inspect the cart, commit, report.
//!
//! ## Input Hygiene
//! Size and ingredient tokens are rejected up front when they would
//! corrupt the buffer encoding (`|`, `,`, newlines, empty). An unknown
//! but well-formed size is accepted into the buffer and rejected at
//! commit time instead, where the whole order fails.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use crate::commit::{CommitReceipt, OrderCommitService};
use crate::config::Config;
use crate::error::{ApiError, ErrorCode};
use crate::reports::{ReportService, ReportWindow, SalesReport};
use forno_cart::PendingOrderStore;
use forno_core::catalog::Catalog;
use forno_core::types::{CustomerInfo, StagedLine};
use forno_core::validation::{validate_buffer_token, validate_quantity};
use forno_db::{Database, DbConfig};

// =============================================================================
// Views
// =============================================================================

/// Snapshot of the staged cart for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// The staged lines, in buffer order.
    pub lines: Vec<StagedLine>,

    /// Number of staged lines.
    pub line_count: usize,

    /// Total pizzas across all lines.
    pub total_quantity: i64,
}

/// Outcome of a commit attempt, in the shape the UI consumes.
///
/// ## Serialization
/// ```json
/// { "ok": true, "saleId": "a1b2...", "totalCents": 24000 }
/// { "ok": false, "errorKind": "EMPTY_CART", "message": "Cannot commit an empty order" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CommitOutcome {
    #[serde(rename_all = "camelCase")]
    Committed {
        ok: bool,
        sale_id: String,
        total_cents: i64,
    },
    #[serde(rename_all = "camelCase")]
    Rejected {
        ok: bool,
        error_kind: ErrorCode,
        message: String,
    },
}

impl CommitOutcome {
    fn committed(receipt: CommitReceipt) -> Self {
        CommitOutcome::Committed {
            ok: true,
            sale_id: receipt.sale_id,
            total_cents: receipt.total_cents,
        }
    }

    fn rejected(err: ApiError) -> Self {
        CommitOutcome::Rejected {
            ok: false,
            error_kind: err.code,
            message: err.message,
        }
    }

    /// Whether the commit succeeded.
    pub fn is_ok(&self) -> bool {
        matches!(self, CommitOutcome::Committed { .. })
    }
}

// =============================================================================
// Counter
// =============================================================================

/// The order-taking counter: staging, checkout, and reporting in one
/// handle. Cheap to clone; clones share the buffer lock and the pool.
#[derive(Debug, Clone)]
pub struct Counter {
    store: Arc<PendingOrderStore>,
    catalog: Catalog,
    db: Database,
    commit: OrderCommitService,
    reports: ReportService,
}

impl Counter {
    /// Opens the durable stores named by `config` and runs any pending
    /// migrations.
    pub async fn connect(config: &Config) -> Result<Self, ApiError> {
        if let Err(e) = config.ensure_data_dir() {
            error!(dir = %config.data_dir.display(), error = %e, "Cannot create data directory");
            return Err(ApiError::persistence());
        }

        let db = Database::new(DbConfig::new(config.database_path())).await?;
        let store = Arc::new(PendingOrderStore::new(config.cart_path()));
        let catalog = Catalog::standard();

        info!(
            cart = %config.cart_path().display(),
            database = %config.database_path().display(),
            "Counter ready"
        );

        Ok(Counter::assemble(store, catalog, db))
    }

    /// Wires a counter from already-opened stores. Used by `connect` and
    /// by tests that want an in-memory database.
    pub fn assemble(store: Arc<PendingOrderStore>, catalog: Catalog, db: Database) -> Self {
        let commit = OrderCommitService::new(store.clone(), catalog.clone(), db.sales());
        let reports = ReportService::new(db.sales());
        Counter {
            store,
            catalog,
            db,
            commit,
            reports,
        }
    }

    /// The pricing catalog in effect.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Stages one pizza line at the end of the pending order.
    ///
    /// Rejects tokens that would corrupt the buffer encoding and
    /// non-positive quantities. Does NOT require the size to exist in
    /// the catalog; that is checked at commit, where it fails the whole
    /// order.
    pub async fn add_line(
        &self,
        size: &str,
        quantity: i64,
        ingredients: Vec<String>,
    ) -> Result<CartView, ApiError> {
        validate_buffer_token("size", size)?;
        validate_quantity(quantity)?;
        for ingredient in &ingredients {
            validate_buffer_token("ingredient", ingredient)?;
        }

        let line = StagedLine::new(size.trim(), quantity, trim_all(ingredients));
        self.store.append(&line).await?;

        self.list_cart().await
    }

    /// Removes the staged line at `index`. Returns whether a removal
    /// occurred; out-of-range is `Ok(false)`, never an error.
    pub async fn remove_line(&self, index: usize) -> Result<bool, ApiError> {
        Ok(self.store.remove_at(index).await?)
    }

    /// Discards every staged line.
    pub async fn clear_cart(&self) -> Result<CartView, ApiError> {
        self.store.clear().await?;
        self.list_cart().await
    }

    /// Current contents of the pending order, re-read from disk.
    pub async fn list_cart(&self) -> Result<CartView, ApiError> {
        let lines = self.store.load().await?;
        let total_quantity = lines.iter().map(|l| l.quantity).sum();
        Ok(CartView {
            line_count: lines.len(),
            total_quantity,
            lines,
        })
    }

    /// Commits the whole pending order as one sale.
    ///
    /// Never returns `Err`: every failure is folded into the
    /// [`CommitOutcome`] shape so the UI has a single path to render.
    pub async fn commit_order(&self, customer: &CustomerInfo) -> CommitOutcome {
        match self.commit.commit(customer).await {
            Ok(receipt) => CommitOutcome::committed(receipt),
            Err(e) => CommitOutcome::rejected(ApiError::from(e)),
        }
    }

    /// Sales report for the current local day or month.
    pub async fn sales_report(&self, window: ReportWindow) -> Result<SalesReport, ApiError> {
        Ok(self.reports.report(window).await?)
    }
}

fn trim_all(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(|v| v.trim().to_string()).collect()
}

// =============================================================================
// Tests
// =============================================================================
