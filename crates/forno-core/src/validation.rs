//! # Validation Module
//!
//! Input validation utilities for Forno POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI layer (out of scope)                                      │
//! │  ├── Basic format checks (empty fields, lengths)                       │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Counter facade (Rust)                                        │
//! │  └── THIS MODULE: business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Storage                                                      │
//! │  ├── Buffer framing (delimiter characters rejected up front)           │
//! │  └── Ledger CHECK / NOT NULL / FK constraints                          │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::CustomerInfo;
use crate::MAX_LINE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Customer Validation
// =============================================================================

/// Validates customer info for a commit: all three fields must be non-empty
/// after trimming. Returns the trimmed copy that is persisted.
///
/// ## Example
/// ```rust
/// use forno_core::types::CustomerInfo;
/// use forno_core::validation::validate_customer;
///
/// let ok = CustomerInfo::new("Ana", "12 Oak St", "555-0101");
/// assert!(validate_customer(&ok).is_ok());
///
/// let missing_phone = CustomerInfo::new("Ana", "12 Oak St", "   ");
/// assert!(validate_customer(&missing_phone).is_err());
/// ```
pub fn validate_customer(customer: &CustomerInfo) -> ValidationResult<CustomerInfo> {
    let trimmed = customer.trimmed();

    if trimmed.name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if trimmed.address.is_empty() {
        return Err(ValidationError::Required {
            field: "address".to_string(),
        });
    }

    if trimmed.phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    Ok(trimmed)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_LINE_QUANTITY`] (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Buffer Token Validation
// =============================================================================

/// Validates a size or ingredient token before it enters the staging buffer.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must not contain `|`, `,`, or line breaks — those are the buffer's
///   record framing characters and would corrupt the encoding
///
/// ## Example
/// ```rust
/// use forno_core::validation::validate_buffer_token;
///
/// assert!(validate_buffer_token("ingredient", "mozzarella").is_ok());
/// assert!(validate_buffer_token("ingredient", "ham|cheese").is_err());
/// assert!(validate_buffer_token("size", "").is_err());
/// ```
pub fn validate_buffer_token(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.contains(['|', ',', '\n', '\r']) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not contain '|', ',' or line breaks".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_trims_and_accepts() {
        let customer = CustomerInfo::new(" Ana ", " 12 Oak St ", " 555-0101 ");
        let trimmed = validate_customer(&customer).unwrap();

        assert_eq!(trimmed.name, "Ana");
        assert_eq!(trimmed.address, "12 Oak St");
        assert_eq!(trimmed.phone, "555-0101");
    }

    #[test]
    fn test_validate_customer_names_missing_field() {
        let no_name = CustomerInfo::new("  ", "12 Oak St", "555-0101");
        let err = validate_customer(&no_name).unwrap_err();
        assert!(matches!(err, ValidationError::Required { ref field } if field == "name"));

        let no_address = CustomerInfo::new("Ana", "", "555-0101");
        let err = validate_customer(&no_address).unwrap_err();
        assert!(matches!(err, ValidationError::Required { ref field } if field == "address"));

        let no_phone = CustomerInfo::new("Ana", "12 Oak St", "\t");
        let err = validate_customer(&no_phone).unwrap_err();
        assert!(matches!(err, ValidationError::Required { ref field } if field == "phone"));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(MAX_LINE_QUANTITY).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_quantity_caps_at_maximum() {
        let err = validate_quantity(MAX_LINE_QUANTITY + 1).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { ref field, max, .. }
            if field == "quantity" && max == MAX_LINE_QUANTITY));

        // A quantity near the i64 ceiling is rejected, not wrapped
        assert!(validate_quantity(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_buffer_token() {
        assert!(validate_buffer_token("ingredient", "mozzarella").is_ok());
        assert!(validate_buffer_token("size", "medium").is_ok());

        assert!(validate_buffer_token("ingredient", "").is_err());
        assert!(validate_buffer_token("ingredient", "   ").is_err());
        assert!(validate_buffer_token("ingredient", "ham|cheese").is_err());
        assert!(validate_buffer_token("ingredient", "ham,cheese").is_err());
        assert!(validate_buffer_token("size", "med\nium").is_err());
        assert!(validate_buffer_token("size", "med\rium").is_err());
    }
}
