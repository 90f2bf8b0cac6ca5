//! # Sale Repository
//!
//! Database operations for committed sales.
//!
//! ## Commit Transaction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  insert_order (single transaction)                      │
//! │                                                                         │
//! │  BEGIN                                                                 │
//! │    INSERT sales (id, customer_*, total_cents, created_at)              │
//! │    for each priced line:                                               │
//! │      INSERT sale_details (id, sale_id, size, quantity, subtotal)       │
//! │      for each ingredient:                                              │
//! │        INSERT detail_ingredients (id, detail_id, name)                 │
//! │  COMMIT                                                                │
//! │                                                                         │
//! │  Any failure (constraint violation, I/O) rolls the whole transaction   │
//! │  back: no partial Sale/Detail/Ingredient rows survive. sqlx rolls back │
//! │  on transaction drop, so early returns via `?` are safe.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! IDs are UUID v4 strings assigned here, at persist time.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use forno_core::pricing::PricedOrder;
use forno_core::types::{CustomerInfo, DetailIngredient, Sale, SaleDetail};

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Persists a priced order as a Sale with its details and ingredients,
    /// timestamped now. See [`SaleRepository::insert_order_at`].
    pub async fn insert_order(
        &self,
        customer: &CustomerInfo,
        order: &PricedOrder,
    ) -> DbResult<Sale> {
        self.insert_order_at(customer, order, Utc::now()).await
    }

    /// Persists a priced order with an explicit commit timestamp.
    ///
    /// The explicit timestamp exists for the seed binary and for window
    /// tests; the commit pipeline always goes through [`insert_order`].
    ///
    /// All rows are written in one transaction: on any failure the
    /// transaction rolls back whole and the error propagates.
    ///
    /// [`insert_order`]: SaleRepository::insert_order
    pub async fn insert_order_at(
        &self,
        customer: &CustomerInfo,
        order: &PricedOrder,
        created_at: DateTime<Utc>,
    ) -> DbResult<Sale> {
        let sale = Sale {
            id: Uuid::new_v4().to_string(),
            customer_name: customer.name.clone(),
            customer_address: customer.address.clone(),
            customer_phone: customer.phone.clone(),
            total_cents: order.total.cents(),
            created_at,
        };

        debug!(id = %sale.id, total = %order.total, lines = order.line_count(), "Inserting sale");

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO sales (
                id, customer_name, customer_address, customer_phone,
                total_cents, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&sale.id)
        .bind(&sale.customer_name)
        .bind(&sale.customer_address)
        .bind(&sale.customer_phone)
        .bind(sale.total_cents)
        .bind(sale.created_at)
        .execute(&mut *tx)
        .await?;

        for line in &order.lines {
            let detail_id = Uuid::new_v4().to_string();

            sqlx::query(
                r#"
                INSERT INTO sale_details (id, sale_id, size, quantity, subtotal_cents)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(&detail_id)
            .bind(&sale.id)
            .bind(&line.size)
            .bind(line.quantity)
            .bind(line.subtotal.cents())
            .execute(&mut *tx)
            .await?;

            for name in &line.ingredients {
                sqlx::query(
                    r#"
                    INSERT INTO detail_ingredients (id, detail_id, name)
                    VALUES (?1, ?2, ?3)
                    "#,
                )
                .bind(Uuid::new_v4().to_string())
                .bind(&detail_id)
                .bind(name)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        Ok(sale)
    }

    /// Gets a sale by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, customer_name, customer_address, customer_phone,
                   total_cents, created_at
            FROM sales
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// All sales committed in the half-open UTC window `[start, end)`,
    /// ordered by commit time.
    ///
    /// Calendar semantics (server-local day/month boundaries) are resolved
    /// by the query service; the ledger only compares UTC instants.
    pub async fn sales_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DbResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, customer_name, customer_address, customer_phone,
                   total_cents, created_at
            FROM sales
            WHERE created_at >= ?1 AND created_at < ?2
            ORDER BY created_at
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    /// All detail lines of a committed sale (receipt/audit view).
    pub async fn sale_details(&self, sale_id: &str) -> DbResult<Vec<SaleDetail>> {
        let details = sqlx::query_as::<_, SaleDetail>(
            r#"
            SELECT id, sale_id, size, quantity, subtotal_cents
            FROM sale_details
            WHERE sale_id = ?1
            ORDER BY id
            "#,
        )
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(details)
    }

    /// All ingredients of one detail line.
    pub async fn detail_ingredients(&self, detail_id: &str) -> DbResult<Vec<DetailIngredient>> {
        let ingredients = sqlx::query_as::<_, DetailIngredient>(
            r#"
            SELECT id, detail_id, name
            FROM detail_ingredients
            WHERE detail_id = ?1
            ORDER BY id
            "#,
        )
        .bind(detail_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ingredients)
    }

    /// Total number of committed sales (used by the seed binary).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
