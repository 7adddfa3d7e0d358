//! # Catalog Commands
//!
//! Product list and category commands.

use paradise_catalog::{Catalog, CatalogQuery, SortOrder, ALL_CATEGORIES};
use paradise_core::{CartStore, Product};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;

/// Product list response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponse {
    /// Category shown (`"All"` when unfiltered)
    pub category: String,
    pub sort: SortOrder,
    pub search: String,
    pub count: usize,
    pub products: Vec<ProductListing>,
}

/// A product as the list shows it, with its cart badge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    #[serde(flatten)]
    pub product: Product,
    /// Drives the "Added to Cart" button state
    pub in_cart: bool,
    pub quantity_in_cart: i64,
}

impl ProductListing {
    fn new(product: &Product, cart: &CartStore) -> Self {
        ProductListing {
            product: product.clone(),
            in_cart: cart.contains(product.id),
            quantity_in_cart: cart.quantity_of(product.id),
        }
    }
}

/// Categories response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Lists products.
///
/// ## Arguments
/// * `category` - `all`, or a category name with `-`/`_` for spaces
///   (`air-purifying`), matched case-insensitively
/// * `sort` - sort order
/// * `search` - free text over title and description
///
/// Each product is marked with how many units of it the cart holds.
pub fn list_products(
    catalog: &Catalog,
    cart: &CartStore,
    category: Option<&str>,
    sort: SortOrder,
    search: &str,
) -> Result<ProductsResponse, ApiError> {
    debug!(?category, ?sort, search, "list_products command");

    let category = match category {
        Some(token) => resolve_category(catalog, token)?,
        None => None,
    };
    let query = CatalogQuery {
        category,
        search: search.to_string(),
        sort,
    };
    let products: Vec<ProductListing> = catalog
        .query(&query)?
        .into_iter()
        .map(|product| ProductListing::new(product, cart))
        .collect();

    Ok(ProductsResponse {
        category: query
            .category
            .unwrap_or_else(|| ALL_CATEGORIES.to_string()),
        sort,
        search: query.search.trim().to_string(),
        count: products.len(),
        products,
    })
}

/// Lists categories, `"All"` first.
pub fn list_categories(catalog: &Catalog) -> CategoriesResponse {
    debug!("list_categories command");
    CategoriesResponse {
        categories: catalog.categories().into_iter().map(String::from).collect(),
    }
}

/// Maps a typed category token to the catalog's spelling.
///
/// `None` means no filter.
fn resolve_category(catalog: &Catalog, token: &str) -> Result<Option<String>, ApiError> {
    let wanted = token.replace(['-', '_'], " ").to_lowercase();
    if wanted == ALL_CATEGORIES.to_lowercase() {
        return Ok(None);
    }

    catalog
        .categories()
        .into_iter()
        .find(|c| c.to_lowercase() == wanted)
        .map(|c| Some(c.to_string()))
        .ok_or_else(|| ApiError::validation(format!("Unknown category: '{}'", token)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_list_all_products() {
        let catalog = Catalog::nursery();
        let response = list_products(&catalog, &CartStore::new(), None, SortOrder::Default, "").unwrap();
        assert_eq!(response.category, "All");
        assert_eq!(response.count, catalog.len());
    }

    #[test]
    fn test_category_token() {
        let catalog = Catalog::nursery();
        let cart = CartStore::new();
        let response =
            list_products(&catalog, &cart, Some("insect-repellent"), SortOrder::PriceLowToHigh, "")
                .unwrap();
        assert_eq!(response.category, "Insect Repellent");
        let titles: Vec<_> = response.products.iter().map(|p| p.product.title.as_str()).collect();
        assert_eq!(titles, vec!["Marigold", "Citronella"]);

        let response = list_products(&catalog, &cart, Some("ALL"), SortOrder::Default, "").unwrap();
        assert_eq!(response.count, catalog.len());
    }

    #[test]
    fn test_unknown_category() {
        let catalog = Catalog::nursery();
        let err = list_products(&catalog, &CartStore::new(), Some("cacti"), SortOrder::Default, "").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_listing_marks_cart_contents() {
        let catalog = Catalog::nursery();
        let mut cart = CartStore::new();
        let snake = catalog.get(paradise_core::ProductId::new(1)).unwrap();
        cart.add_item(snake);
        cart.add_item(snake);

        let response = list_products(&catalog, &cart, None, SortOrder::Default, "").unwrap();
        let listed = |id: u32| {
            response
                .products
                .iter()
                .find(|p| p.product.id.get() == id)
                .unwrap()
        };
        assert!(listed(1).in_cart);
        assert_eq!(listed(1).quantity_in_cart, 2);
        assert!(!listed(2).in_cart);
        assert_eq!(listed(2).quantity_in_cart, 0);

        let json = serde_json::to_value(&response.products[0]).unwrap();
        assert_eq!(json["title"], "Snake Plant");
        assert_eq!(json["inCart"], true);
        assert_eq!(json["quantityInCart"], 2);
    }

    #[test]
    fn test_categories() {
        let response = list_categories(&Catalog::nursery());
        assert_eq!(response.categories[0], "All");
        assert_eq!(response.categories.len(), 6);
    }
}
