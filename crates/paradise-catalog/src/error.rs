//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Bad id / bad query text                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in the shop app) ← Serialized for the front-end             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use paradise_core::{ProductId, ValidationError};
use thiserror::Error;

/// Catalog lookup and query errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No product with this id.
    ///
    /// ## When This Occurs
    /// - "Add to Cart" for an id that is not in the catalog
    /// - Stale id typed into the shop prompt
    #[error("Product not found: {id}")]
    ProductNotFound { id: ProductId },

    /// Unknown sort option.
    #[error("Unknown sort order: '{0}'. Valid options: default, price-asc, price-desc, name-asc, name-desc")]
    UnknownSortOrder(String),

    /// Query text failed validation.
    #[error("Invalid query: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::ProductNotFound {
            id: ProductId::new(42),
        };
        assert_eq!(err.to_string(), "Product not found: 42");

        let err: CatalogError = ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        }
        .into();
        assert_eq!(err.to_string(), "Invalid query: query must be at most 100 characters");
    }
}
