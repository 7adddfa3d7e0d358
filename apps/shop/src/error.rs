//! # API Error Type
//!
//! Unified error type for shop commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Paradise Shop                          │
//! │                                                                         │
//! │  stdin: "coupon FOO"                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Catalog Error? ─── CatalogError::ProductNotFound ──┐           │  │
//! │  │         │                                           │           │  │
//! │  │         ▼                                           ▼           │  │
//! │  │  Core Error? ─── CoreError::InvalidCoupon ──────► ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  stdout: {"error":{"code":"INVALID_COUPON","message":"..."}}            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use paradise_catalog::CatalogError;
use paradise_core::CoreError;
use serde::Serialize;

/// API error returned from shop commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_COUPON",
///   "message": "Invalid coupon code: FOO"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id not in the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Coupon code not recognised
    InvalidCoupon,

    /// Quantity text is not a whole number, or exceeds the per-line limit
    InvalidQuantity,

    /// Checkout with nothing in the cart
    EmptyCart,

    /// Pricing invariant violated
    PricingError,

    /// Command word not recognised, or wrong arguments
    UnknownCommand,

    /// Response could not be produced
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Bad command word or argument count.
    pub fn usage(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::UnknownCommand, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidCoupon { .. } => ErrorCode::InvalidCoupon,
            CoreError::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            CoreError::EmptyCart => ErrorCode::EmptyCart,
            CoreError::DiscountExceedsSubtotal { .. } => {
                tracing::error!(error = %err, "pricing invariant violated");
                ErrorCode::PricingError
            }
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts catalog errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let code = match &err {
            CatalogError::ProductNotFound { .. } => ErrorCode::NotFound,
            CatalogError::UnknownSortOrder(_) | CatalogError::Validation(_) => {
                ErrorCode::ValidationError
            }
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use paradise_core::ProductId;

    #[test]
    fn test_core_error_codes() {
        let err: ApiError = CoreError::InvalidCoupon {
            code: "FOO".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidCoupon);
        assert_eq!(err.message, "Invalid coupon code: FOO");

        let err: ApiError = CoreError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::EmptyCart);
    }

    #[test]
    fn test_catalog_error_codes() {
        let err: ApiError = CatalogError::ProductNotFound {
            id: ProductId::new(77),
        }
        .into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 77");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::usage("Unknown command: dance");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "UNKNOWN_COMMAND");
        assert_eq!(json["message"], "Unknown command: dance");
    }
}
