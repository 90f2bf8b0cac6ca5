//! # Pricing Engine
//!
//! Pure subtotal and total computation over the catalog and staged lines.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Commit-Time Pricing                                │
//! │                                                                         │
//! │  StagedLine { size: "medium", quantity: 2, ingredients: [a, b] }       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  price_line(catalog, "medium", 2, 2)  ← THIS MODULE                    │
//! │       │                                                                 │
//! │       ├── size not in catalog? → CoreError::UnknownSize (hard error)   │
//! │       │                                                                 │
//! │       └── (8000 + 2 × 1000) × 2 = 20000 cents                          │
//! │                                                                         │
//! │  price_order sums price_line over all staged lines, failing on the     │
//! │  first unknown size — an order is never partially priced.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ingredient count is the raw sequence length: duplicate ingredient names
//! each add a surcharge (per-ingredient billing, intentional).

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::StagedLine;

// =============================================================================
// Priced Output Types
// =============================================================================

/// A staged line together with its computed subtotal. Carries everything the
/// ledger insert needs for one SaleDetail and its ingredients.
#[derive(Debug, Clone, Serialize)]
pub struct PricedLine {
    pub size: String,
    pub quantity: i64,
    pub ingredients: Vec<String>,
    pub subtotal: Money,
}

/// A fully priced order: every line subtotal plus the aggregate total.
#[derive(Debug, Clone, Serialize)]
pub struct PricedOrder {
    pub lines: Vec<PricedLine>,
    pub total: Money,
}

impl PricedOrder {
    /// Number of priced lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

// =============================================================================
// Pricing Functions
// =============================================================================

/// Computes the subtotal of one order line.
///
/// `subtotal = (base_price[size] + ingredient_count × surcharge) × quantity`
///
/// ## Errors
/// [`CoreError::UnknownSize`] if `size` is not a catalog key. Never
/// defaulted: the error must surface at commit time.
/// [`CoreError::AmountOverflow`] if the arithmetic leaves the i64 cent
/// range — possible only through a hand-edited staging buffer, since
/// the counter caps staged quantities.
///
/// ## Example
/// ```rust
/// use forno_core::catalog::Catalog;
/// use forno_core::pricing::price_line;
///
/// let catalog = Catalog::standard();
/// assert_eq!(price_line(&catalog, "medium", 2, 2).unwrap().cents(), 20_000);
/// assert_eq!(price_line(&catalog, "small", 1, 0).unwrap().cents(), 4000);
/// assert!(price_line(&catalog, "family", 1, 0).is_err());
/// ```
pub fn price_line(
    catalog: &Catalog,
    size: &str,
    quantity: i64,
    ingredient_count: usize,
) -> CoreResult<Money> {
    let base = catalog
        .base_price(size)
        .ok_or_else(|| CoreError::UnknownSize(size.to_string()))?;

    catalog
        .ingredient_surcharge()
        .checked_mul(ingredient_count as i64)
        .and_then(|extras| base.checked_add(extras))
        .and_then(|per_pizza| per_pizza.checked_mul(quantity))
        .ok_or(CoreError::AmountOverflow)
}

/// Prices every staged line and the aggregate total.
///
/// Fails on the first unknown size without pricing the rest: a commit either
/// prices the whole order or none of it.
pub fn price_order(catalog: &Catalog, lines: &[StagedLine]) -> CoreResult<PricedOrder> {
    let mut priced = Vec::with_capacity(lines.len());
    let mut total = Money::zero();

    for line in lines {
        let subtotal = price_line(catalog, &line.size, line.quantity, line.ingredient_count())?;
        total = total.checked_add(subtotal).ok_or(CoreError::AmountOverflow)?;
        priced.push(PricedLine {
            size: line.size.clone(),
            quantity: line.quantity,
            ingredients: line.ingredients.clone(),
            subtotal,
        });
    }

    Ok(PricedOrder {
        lines: priced,
        total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(size: &str, quantity: i64, ingredients: &[&str]) -> StagedLine {
        StagedLine::new(
            size,
            quantity,
            ingredients.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_price_line_medium_with_two_ingredients() {
        let catalog = Catalog::standard();
        // (8000 + 2 × 1000) × 2 = 20000
        let subtotal = price_line(&catalog, "medium", 2, 2).unwrap();
        assert_eq!(subtotal.cents(), 20_000);
    }

    #[test]
    fn test_price_line_plain_small() {
        let catalog = Catalog::standard();
        let subtotal = price_line(&catalog, "small", 1, 0).unwrap();
        assert_eq!(subtotal.cents(), 4000);
    }

    #[test]
    fn test_price_line_absurd_quantity_does_not_wrap() {
        let catalog = Catalog::standard();

        let err = price_line(&catalog, "small", i64::MAX, 0).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow));

        // Same through price_order, as a hand-edited buffer would reach it
        let huge = line("small", i64::MAX / 2, &[]);
        assert!(matches!(
            price_order(&catalog, std::slice::from_ref(&huge)),
            Err(CoreError::AmountOverflow)
        ));
    }

    #[test]
    fn test_price_line_unknown_size() {
        let catalog = Catalog::standard();
        let err = price_line(&catalog, "family", 1, 0).unwrap_err();
        assert!(matches!(err, CoreError::UnknownSize(ref s) if s == "family"));
    }

    #[test]
    fn test_duplicate_ingredients_each_bill_the_surcharge() {
        let catalog = Catalog::standard();
        let double_cheese = line("small", 1, &["cheese", "cheese"]);

        let order = price_order(&catalog, std::slice::from_ref(&double_cheese)).unwrap();
        // 4000 + 2 × 1000 = 6000: both occurrences billed
        assert_eq!(order.total.cents(), 6000);
    }

    #[test]
    fn test_price_order_totals() {
        let catalog = Catalog::standard();
        let lines = vec![
            line("medium", 2, &["cheese", "olives"]), // 20000
            line("small", 1, &[]),                    // 4000
        ];

        let order = price_order(&catalog, &lines).unwrap();
        assert_eq!(order.line_count(), 2);
        assert_eq!(order.lines[0].subtotal.cents(), 20_000);
        assert_eq!(order.lines[1].subtotal.cents(), 4000);
        assert_eq!(order.total.cents(), 24_000);
    }

    #[test]
    fn test_price_order_fails_whole_on_unknown_size() {
        let catalog = Catalog::standard();
        let lines = vec![line("small", 1, &[]), line("family", 1, &[])];

        assert!(price_order(&catalog, &lines).is_err());
    }

    #[test]
    fn test_price_order_empty_is_zero() {
        let catalog = Catalog::standard();
        let order = price_order(&catalog, &[]).unwrap();
        assert!(order.total.is_zero());
        assert_eq!(order.line_count(), 0);
    }
}
