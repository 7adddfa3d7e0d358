//! # Error Types
//!
//! Domain errors for the cart state engine.
//!
//! ## What Is (and Isn't) an Error
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error vs. Outcome                                   │
//! │                                                                         │
//! │  remove / update / inc / dec on a product not in the cart              │
//! │      └──► NOT an error: CartOutcome::NotInCart (silent no-op)          │
//! │                                                                         │
//! │  coupon code not in the registry                                       │
//! │      └──► CoreError::InvalidCoupon (coupon slot is cleared)            │
//! │                                                                         │
//! │  "abc" typed into a quantity box                                       │
//! │  "9999999999" typed into a quantity box                                │
//! │      └──► CoreError::InvalidQuantity (cart untouched)                  │
//! │                                                                         │
//! │  checkout with nothing in the cart                                     │
//! │      └──► CoreError::EmptyCart                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is recoverable. None of them leave the cart in a partial
//! state.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by cart, coupon and pricing operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Coupon code is not in the registry.
    ///
    /// ## User Workflow
    /// ```text
    /// Enter code: "FOO"
    ///      │
    ///      ▼
    /// CouponRegistry::validate("FOO")
    ///      │
    ///      ▼
    /// InvalidCoupon { code: "FOO" }
    ///      │
    ///      ▼
    /// UI shows: "Invalid coupon code: FOO" (discount back to $0.00)
    /// ```
    #[error("Invalid coupon code: {code}")]
    InvalidCoupon { code: String },

    /// Quantity is not a whole number, or exceeds [`MAX_LINE_QUANTITY`].
    ///
    /// [`MAX_LINE_QUANTITY`]: crate::MAX_LINE_QUANTITY
    #[error(
        "Invalid quantity: '{input}' (expected a whole number up to {})",
        crate::MAX_LINE_QUANTITY
    )]
    InvalidQuantity { input: String },

    /// Checkout was requested for an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Pricing produced a discount larger than the subtotal.
    #[error("Discount {discount} exceeds subtotal {subtotal}")]
    DiscountExceedsSubtotal { discount: Money, subtotal: Money },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before cart logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., "12.3.4" as a price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidCoupon {
            code: "FOO".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid coupon code: FOO");

        let err = CoreError::InvalidQuantity {
            input: "2.5".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid quantity: '2.5' (expected a whole number up to 9999)");

        let err = CoreError::DiscountExceedsSubtotal {
            discount: Money::from_cents(1200),
            subtotal: Money::from_cents(1000),
        };
        assert_eq!(err.to_string(), "Discount $12.00 exceeds subtotal $10.00");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "coupon code".to_string(),
        };
        assert_eq!(err.to_string(), "coupon code is required");

        let err = ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "query must be at most 100 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
