//! # Catalog
//!
//! Read-only, ordered product list with lookup and product list queries.

use paradise_core::validation::validate_search_query;
use paradise_core::{Product, ProductId};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::plants::nursery_stock;
use crate::query::{CatalogQuery, ALL_CATEGORIES};

/// The product catalog.
///
/// ## Usage
/// ```rust
/// use paradise_catalog::{Catalog, CatalogQuery, SortOrder};
///
/// let catalog = Catalog::nursery();
///
/// let cheapest_first = catalog
///     .query(&CatalogQuery {
///         category: Some("Aromatic".to_string()),
///         sort: SortOrder::PriceLowToHigh,
///         ..Default::default()
///     })
///     .unwrap();
/// assert_eq!(cheapest_first[0].title, "Rosemary");
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wraps an ordered product list.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// The built-in nursery stock.
    pub fn nursery() -> Self {
        Catalog::new(nursery_stock())
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> CatalogResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::ProductNotFound { id })
    }

    /// `"All"` followed by each distinct category in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Runs a product list query.
    ///
    /// ## Errors
    /// [`CatalogError::Validation`] if the search text is too long.
    pub fn query(&self, query: &CatalogQuery) -> CatalogResult<Vec<&Product>> {
        let needle = validate_search_query(&query.search)?.to_lowercase();

        let mut results: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| query.matches(p, &needle))
            .collect();
        query.sort(&mut results);

        debug!(
            category = ?query.category,
            search = %needle,
            sort = ?query.sort,
            count = results.len(),
            "catalog query"
        );
        Ok(results)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::nursery()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortOrder;
    use paradise_core::Money;

    fn titles(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::nursery();
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().title, "Snake Plant");
        assert_eq!(
            catalog.get(ProductId::new(999)),
            Err(CatalogError::ProductNotFound {
                id: ProductId::new(999)
            })
        );
    }

    #[test]
    fn test_categories() {
        let catalog = Catalog::nursery();
        assert_eq!(
            catalog.categories(),
            vec![
                "All",
                "Air Purifying",
                "Aromatic",
                "Insect Repellent",
                "Medicinal",
                "Low Maintenance"
            ]
        );
    }

    #[test]
    fn test_default_query_returns_everything_in_order() {
        let catalog = Catalog::nursery();
        let all = catalog.query(&CatalogQuery::default()).unwrap();
        assert_eq!(all.len(), catalog.len());
        assert_eq!(all[0].id, ProductId::new(1));
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::nursery();
        let query = CatalogQuery {
            category: Some("Medicinal".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(&catalog.query(&query).unwrap()), vec!["Aloe Vera", "Echinacea"]);

        let all = CatalogQuery {
            category: Some("All".to_string()),
            ..Default::default()
        };
        assert_eq!(catalog.query(&all).unwrap().len(), catalog.len());

        let unknown = CatalogQuery {
            category: Some("Cacti".to_string()),
            ..Default::default()
        };
        assert!(catalog.query(&unknown).unwrap().is_empty());
    }

    #[test]
    fn test_search_matches_title_and_description() {
        let catalog = Catalog::nursery();

        let by_title = CatalogQuery {
            search: "  LILY ".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&catalog.query(&by_title).unwrap()), vec!["Peace Lily"]);

        let by_description = CatalogQuery {
            search: "mosquitoes".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&catalog.query(&by_description).unwrap()), vec!["Citronella"]);
    }

    #[test]
    fn test_search_combined_with_category() {
        let catalog = Catalog::nursery();
        let query = CatalogQuery {
            category: Some("Air Purifying".to_string()),
            search: "air".to_string(),
            sort: SortOrder::NameZToA,
        };
        assert_eq!(
            titles(&catalog.query(&query).unwrap()),
            vec!["Spider Plant", "Snake Plant", "Peace Lily", "Boston Fern"]
        );
    }

    #[test]
    fn test_sort_by_price_is_stable() {
        let catalog = Catalog::nursery();
        let query = CatalogQuery {
            sort: SortOrder::PriceLowToHigh,
            ..Default::default()
        };
        let sorted = catalog.query(&query).unwrap();
        assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));

        // Snake Plant and Rosemary are both $15.00; catalog order decides
        let fifteen: Vec<_> = sorted
            .iter()
            .filter(|p| p.price == Money::from_cents(1500))
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(fifteen, vec!["Snake Plant", "Rosemary"]);

        let query = CatalogQuery {
            sort: SortOrder::PriceHighToLow,
            ..Default::default()
        };
        assert_eq!(catalog.query(&query).unwrap()[0].title, "ZZ Plant");
    }

    #[test]
    fn test_sort_by_name() {
        let catalog = Catalog::nursery();
        let query = CatalogQuery {
            sort: SortOrder::NameAToZ,
            ..Default::default()
        };
        let sorted = catalog.query(&query).unwrap();
        assert_eq!(sorted.first().unwrap().title, "Aloe Vera");
        assert_eq!(sorted.last().unwrap().title, "ZZ Plant");
    }

    #[test]
    fn test_overlong_search_rejected() {
        let catalog = Catalog::nursery();
        let query = CatalogQuery {
            search: "x".repeat(101),
            ..Default::default()
        };
        assert!(matches!(catalog.query(&query), Err(CatalogError::Validation(_))));
    }
}
