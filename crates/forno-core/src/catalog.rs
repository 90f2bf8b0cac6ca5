//! # Catalog Module
//!
//! The static pricing table: pizza size → base price, plus a flat
//! per-ingredient surcharge.
//!
//! ## Pricing Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Standard Catalog                                  │
//! │                                                                         │
//! │   Size      Base Price        Each ingredient adds a flat surcharge    │
//! │   ──────    ──────────        ──────────────────────────────────────   │
//! │   small     $40.00            +$10.00 per ingredient                   │
//! │   medium    $80.00            (duplicates each bill the surcharge)     │
//! │   large     $120.00                                                    │
//! │                                                                         │
//! │   subtotal = (base + ingredients × surcharge) × quantity               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sizes are looked up by string key so that records staged by older
//! software load intact; an unrecognized size surfaces as a hard error at
//! pricing time, never silently defaulted.

use std::collections::HashMap;

use crate::money::Money;

/// Standard base price for a small pizza, in cents.
pub const SMALL_BASE_CENTS: i64 = 4000;

/// Standard base price for a medium pizza, in cents.
pub const MEDIUM_BASE_CENTS: i64 = 8000;

/// Standard base price for a large pizza, in cents.
pub const LARGE_BASE_CENTS: i64 = 12_000;

/// Standard flat surcharge per ingredient, in cents.
pub const INGREDIENT_SURCHARGE_CENTS: i64 = 1000;

// =============================================================================
// Catalog
// =============================================================================

/// Size → base price table plus the per-ingredient surcharge.
///
/// ## Example
/// ```rust
/// use forno_core::catalog::Catalog;
///
/// let catalog = Catalog::standard();
/// assert_eq!(catalog.base_price("medium").unwrap().cents(), 8000);
/// assert!(catalog.base_price("calzone").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Base prices keyed by size name.
    base_prices: HashMap<String, Money>,

    /// Flat surcharge added once per ingredient on a line.
    ingredient_surcharge: Money,
}

impl Catalog {
    /// Creates a catalog from explicit size prices and a surcharge.
    pub fn new(
        base_prices: impl IntoIterator<Item = (String, Money)>,
        ingredient_surcharge: Money,
    ) -> Self {
        Catalog {
            base_prices: base_prices.into_iter().collect(),
            ingredient_surcharge,
        }
    }

    /// The standard counter catalog: small/medium/large with a $10.00
    /// per-ingredient surcharge.
    pub fn standard() -> Self {
        Catalog::new(
            [
                ("small".to_string(), Money::from_cents(SMALL_BASE_CENTS)),
                ("medium".to_string(), Money::from_cents(MEDIUM_BASE_CENTS)),
                ("large".to_string(), Money::from_cents(LARGE_BASE_CENTS)),
            ],
            Money::from_cents(INGREDIENT_SURCHARGE_CENTS),
        )
    }

    /// Looks up the base price for a size, `None` if the size is unknown.
    pub fn base_price(&self, size: &str) -> Option<Money> {
        self.base_prices.get(size).copied()
    }

    /// Returns the flat per-ingredient surcharge.
    #[inline]
    pub fn ingredient_surcharge(&self) -> Money {
        self.ingredient_surcharge
    }

    /// Checks whether a size exists in the catalog.
    pub fn has_size(&self, size: &str) -> bool {
        self.base_prices.contains_key(size)
    }

    /// Iterates over the known size names.
    pub fn sizes(&self) -> impl Iterator<Item = &str> {
        self.base_prices.keys().map(String::as_str)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
