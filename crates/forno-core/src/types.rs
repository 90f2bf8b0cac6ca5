//! # Domain Types
//!
//! Core domain types used throughout Forno POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  STAGING SIDE (mutable, file-backed)    LEDGER SIDE (append-only)      │
//! │                                                                         │
//! │  ┌─────────────────┐                    ┌─────────────────┐            │
//! │  │   StagedLine    │   commit ────────► │      Sale       │            │
//! │  │  ─────────────  │                    │  ─────────────  │            │
//! │  │  size (String)  │                    │  id (UUID)      │            │
//! │  │  quantity       │                    │  customer_*     │            │
//! │  │  ingredients[]  │                    │  total_cents    │            │
//! │  └─────────────────┘                    │  created_at     │            │
//! │                                         └────────┬────────┘            │
//! │  ┌─────────────────┐                             │ 1─N                 │
//! │  │  CustomerInfo   │                    ┌────────▼────────┐            │
//! │  │  ─────────────  │                    │   SaleDetail    │  1─N       │
//! │  │  name           │                    │  size, quantity ├──► Detail- │
//! │  │  address        │                    │  subtotal_cents │    Ingre-  │
//! │  │  phone          │                    └─────────────────┘    dient   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Staged Line
// =============================================================================

/// One buffered order line: a pizza that has been added to the cart but
/// not yet committed to the ledger.
///
/// ## Design Notes
/// - `size` is carried as a plain string, not an enum: staged records
///   written by older software (or a hand-edited buffer) must load intact
///   and surface an unknown size at commit time, not at load time.
/// - `ingredients` allows duplicates; each occurrence bills the surcharge
///   (per-ingredient billing). Order is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedLine {
    /// Size key into the catalog ("small", "medium", "large").
    pub size: String,

    /// Number of pizzas on this line. Positive when staged through the
    /// facade; enforced again by a ledger CHECK constraint at commit.
    pub quantity: i64,

    /// Ingredient names in display order. Duplicates allowed.
    pub ingredients: Vec<String>,
}

impl StagedLine {
    /// Creates a staged line.
    pub fn new(size: impl Into<String>, quantity: i64, ingredients: Vec<String>) -> Self {
        StagedLine {
            size: size.into(),
            quantity,
            ingredients,
        }
    }

    /// Number of billable ingredients (raw sequence length, duplicates count).
    #[inline]
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }
}

// =============================================================================
// Customer Info
// =============================================================================

/// Contact and delivery details supplied at checkout.
///
/// All three fields are required non-empty after trimming; validated by
/// [`crate::validation::validate_customer`] before a commit is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl CustomerInfo {
    /// Creates customer info from raw form fields.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        CustomerInfo {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }

    /// Returns a copy with all fields trimmed. Runs before validation and
    /// before persistence so the ledger never stores padded values.
    pub fn trimmed(&self) -> Self {
        CustomerInfo {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A committed order in the append-only ledger.
///
/// Created only by the commit pipeline; never mutated or deleted after
/// creation. `created_at` is assigned at commit time and immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    /// Unique identifier (UUID v4), assigned at persist time.
    pub id: String,

    pub customer_name: String,
    pub customer_address: String,
    pub customer_phone: String,

    /// Sum of this sale's detail subtotals, in cents.
    pub total_cents: i64,

    /// Commit timestamp, stored UTC.
    pub created_at: DateTime<Utc>,
}

impl Sale {
    /// Returns the sale total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Sale Detail
// =============================================================================

/// One pizza line within a committed sale. Owned by exactly one Sale,
/// created together with it in the same transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleDetail {
    pub id: String,
    pub sale_id: String,
    pub size: String,
    pub quantity: i64,

    /// (base price + ingredient surcharge × ingredient count) × quantity.
    pub subtotal_cents: i64,
}

impl SaleDetail {
    /// Returns the line subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }
}

// =============================================================================
// Detail Ingredient
// =============================================================================

/// One named ingredient attached to a SaleDetail; owned by exactly one
/// detail row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct DetailIngredient {
    pub id: String,
    pub detail_id: String,
    pub name: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
