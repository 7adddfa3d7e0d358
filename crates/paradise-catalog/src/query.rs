//! # Product List Query
//!
//! Filter, search and sort parameters for the product list.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product List Pipeline                                │
//! │                                                                         │
//! │  all products (catalog order)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  category filter      None / "All" keeps everything                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  text search          case-insensitive, title OR description           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sort                 stable; ties keep catalog order                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use paradise_core::Product;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CatalogError;

/// Category name that disables the category filter.
pub const ALL_CATEGORIES: &str = "All";

// =============================================================================
// Sort Order
// =============================================================================

/// Product list sort options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Default,
    #[serde(rename = "price-asc")]
    PriceLowToHigh,
    #[serde(rename = "price-desc")]
    PriceHighToLow,
    #[serde(rename = "name-asc")]
    NameAToZ,
    #[serde(rename = "name-desc")]
    NameZToA,
}

impl SortOrder {
    fn sort(&self, products: &mut [&Product]) {
        match self {
            SortOrder::Default => {}
            SortOrder::PriceLowToHigh => products.sort_by_key(|p| p.price),
            SortOrder::PriceHighToLow => products.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::NameAToZ => products.sort_by_cached_key(|p| p.title.to_lowercase()),
            SortOrder::NameZToA => {
                products.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
            }
        }
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" | "" => Ok(SortOrder::Default),
            "price-asc" | "price-low-high" => Ok(SortOrder::PriceLowToHigh),
            "price-desc" | "price-high-low" => Ok(SortOrder::PriceHighToLow),
            "name-asc" | "a-z" => Ok(SortOrder::NameAToZ),
            "name-desc" | "z-a" => Ok(SortOrder::NameZToA),
            other => Err(CatalogError::UnknownSortOrder(other.to_string())),
        }
    }
}

// =============================================================================
// Catalog Query
// =============================================================================

/// What the shopper picked in the filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogQuery {
    /// Category to show; `None` or `"All"` shows every category.
    pub category: Option<String>,

    /// Free-text search over title and description.
    pub search: String,

    pub sort: SortOrder,
}

impl CatalogQuery {
    /// True if `product` passes the category filter and the search.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, product: &Product, needle: &str) -> bool {
        let category_ok = match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => product.category == category,
        };

        let search_ok = needle.is_empty()
            || product.title.to_lowercase().contains(needle)
            || product.description.to_lowercase().contains(needle);

        category_ok && search_ok
    }

    pub(crate) fn sort(&self, products: &mut [&Product]) {
        self.sort.sort(products);
    }
}
