//! # Validation Module
//!
//! Input validation for values that arrive as raw UI text.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end                                                    │
//! │  └── Splits the command line, passes raw text through                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Quantity text → whole number                                      │
//! │  ├── Coupon text   → normalized code                                   │
//! │  └── Search text   → trimmed, bounded query                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: CartStore / PricingEngine                                    │
//! │  └── Only ever sees typed, valid values                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use paradise_core::validation::{normalize_coupon_code, parse_quantity};
//!
//! assert_eq!(parse_quantity("3").unwrap(), 3);
//! assert!(parse_quantity("2.5").is_err());
//! assert_eq!(normalize_coupon_code("  save20 ").unwrap(), "SAVE20");
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Rate;
use crate::{MAX_LINE_QUANTITY, MAX_UNIT_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest search query accepted by the product list.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

/// Longest coupon code accepted before lookup.
pub const MAX_COUPON_CODE_LEN: usize = 32;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses quantity text typed into a cart line's quantity box.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must be a whole number; "2.5", "abc", "" and "NaN" are rejected
/// - Must not exceed [`MAX_LINE_QUANTITY`]
/// - Zero and negative numbers ARE accepted here: the store treats them
///   as "remove this line"
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User types into the quantity box: "4"                                 │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_quantity("4") ← THIS FUNCTION                                   │
/// │       │                                                                 │
/// │       ├── not a whole number? → InvalidQuantity, cart untouched        │
/// │       ├── above 9999?         → InvalidQuantity, cart untouched        │
/// │       │                                                                 │
/// │       └── OK(4) → CartStore::update_quantity(id, 4)                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_quantity(input: &str) -> CoreResult<i64> {
    let invalid = || CoreError::InvalidQuantity {
        input: input.to_string(),
    };

    let quantity = input.trim().parse::<i64>().map_err(|_| invalid())?;
    validate_line_quantity(quantity).map_err(|_| invalid())
}

/// Rejects quantities above [`MAX_LINE_QUANTITY`].
///
/// Zero and negatives pass; they mean "remove the line".
pub fn validate_line_quantity(quantity: i64) -> CoreResult<i64> {
    if quantity > MAX_LINE_QUANTITY {
        return Err(CoreError::InvalidQuantity {
            input: quantity.to_string(),
        });
    }
    Ok(quantity)
}

/// Validates a product price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free seedlings)
/// - At most [`MAX_UNIT_PRICE_CENTS`]
///
/// ## Example
/// ```rust
/// use paradise_core::money::Money;
/// use paradise_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1599)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_UNIT_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a tax or discount rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_rate(rate: Rate) -> ValidationResult<()> {
    if rate.bps() > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "rate".to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Normalizes coupon text before registry lookup.
///
/// ## Rules
/// - Trimmed and uppercased ("  save20 " → "SAVE20")
/// - Must not be empty
/// - Maximum 32 characters
pub fn normalize_coupon_code(code: &str) -> ValidationResult<String> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "coupon code".to_string(),
        });
    }

    if code.chars().count() > MAX_COUPON_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "coupon code".to_string(),
            max: MAX_COUPON_CODE_LEN,
        });
    }

    Ok(code.to_uppercase())
}

/// Validates a product search query.
///
/// ## Rules
/// - Can be empty (returns all products)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("1").unwrap(), 1);
        assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity("-3").unwrap(), -3);

        assert_eq!(parse_quantity("9999").unwrap(), MAX_LINE_QUANTITY);
        assert_eq!(parse_quantity("-9999999999999999").unwrap(), -9_999_999_999_999_999);

        for bad in [
            "",
            "   ",
            "2.5",
            "abc",
            "NaN",
            "1e3",
            "3 apples",
            "10000",
            "9999999999999999",
            "99999999999999999999999",
        ] {
            assert_eq!(
                parse_quantity(bad),
                Err(CoreError::InvalidQuantity {
                    input: bad.to_string()
                }),
                "input {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(2499)).is_ok());
        assert!(validate_price(Money::from_cents(-100)).is_err());
        assert!(validate_price(Money::from_cents(MAX_UNIT_PRICE_CENTS)).is_ok());
        assert!(validate_price(Money::from_cents(MAX_UNIT_PRICE_CENTS + 1)).is_err());
    }

    #[test]
    fn test_validate_line_quantity() {
        assert_eq!(validate_line_quantity(MAX_LINE_QUANTITY), Ok(MAX_LINE_QUANTITY));
        assert_eq!(validate_line_quantity(-5), Ok(-5));
        assert_eq!(
            validate_line_quantity(i64::MAX),
            Err(CoreError::InvalidQuantity {
                input: i64::MAX.to_string()
            })
        );
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate(Rate::zero()).is_ok());
        assert!(validate_rate(Rate::from_bps(1000)).is_ok());
        assert!(validate_rate(Rate::from_bps(10_000)).is_ok());
        assert!(validate_rate(Rate::from_bps(10_001)).is_err());
    }

    #[test]
    fn test_normalize_coupon_code() {
        assert_eq!(normalize_coupon_code("paradise10").unwrap(), "PARADISE10");
        assert_eq!(normalize_coupon_code("  Save20\n").unwrap(), "SAVE20");
        assert!(normalize_coupon_code("").is_err());
        assert!(normalize_coupon_code("   ").is_err());
        assert!(normalize_coupon_code(&"X".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  fern ").unwrap(), "fern");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"a".repeat(101)).is_err());
    }
}
