//! # paradise-catalog: Plant Catalog for Paradise Nursery
//!
//! The read-only product list the storefront sells from.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Paradise Nursery Data Flow                          │
//! │                                                                         │
//! │  Shop command (products / add)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 paradise-catalog (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Catalog    │    │ CatalogQuery  │    │    plants    │  │   │
//! │  │   │ (catalog.rs)  │◄───│  (query.rs)   │    │ (plants.rs)  │  │   │
//! │  │   │ get           │    │ category      │    │ built-in     │  │   │
//! │  │   │ categories    │    │ search        │    │ stock table  │  │   │
//! │  │   │ query         │    │ SortOrder     │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │ &Product                                                       │
//! │       ▼                                                                 │
//! │  paradise-core CartStore::add_item                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - The catalog and its lookups
//! - [`query`] - Filter, search and sort parameters
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust
//! use paradise_catalog::{Catalog, CatalogQuery};
//! use paradise_core::ProductId;
//!
//! let catalog = Catalog::nursery();
//! let lavender = catalog
//!     .query(&CatalogQuery {
//!         search: "lavender".to_string(),
//!         ..Default::default()
//!     })
//!     .unwrap();
//! assert_eq!(lavender.len(), 1);
//!
//! assert!(catalog.get(ProductId::new(1)).is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
mod plants;
pub mod query;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use query::{CatalogQuery, SortOrder, ALL_CATEGORIES};
