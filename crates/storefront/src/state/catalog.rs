//! Catalog State
//!
//! Append-only product registry, filled once at startup.

use crate::domain_models::{Product, ProductCategory, ProductId};
use crate::error::ValidationError;

/// Ordered collection of all known products, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    products: Vec<Product>,
}

impl CatalogState {
    /// Append a product to the catalog
    ///
    /// Ids are not checked for uniqueness: a duplicate id produces a second entry.
    /// Products with a negative price are rejected.
    pub fn add_product(&mut self, product: Product) -> Result<(), ValidationError> {
        product.validate()?;
        self.products.push(product);
        Ok(())
    }

    /// Products visible under `category`, in catalog order
    pub fn products_by_category(&self, category: ProductCategory) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| category.matches(product.category()))
            .collect()
    }

    /// First product registered under `id`
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Price;
    use pretty_assertions::assert_eq;

    fn product(id: i64, category: ProductCategory) -> Product {
        Product::new(id, format!("product {id}"), category, Price::from_cents(100 + id))
    }

    fn ids(products: &[&Product]) -> Vec<i64> {
        products.iter().map(|p| p.id().value()).collect()
    }

    fn catalog() -> CatalogState {
        let mut catalog = CatalogState::default();
        catalog.add_product(product(0, ProductCategory::Devices)).unwrap();
        catalog.add_product(product(1, ProductCategory::Living)).unwrap();
        catalog.add_product(product(2, ProductCategory::Devices)).unwrap();
        catalog.add_product(product(3, ProductCategory::Products)).unwrap();
        catalog
    }

    #[test]
    fn test_all_returns_everything_in_insertion_order() {
        let catalog = catalog();
        assert_eq!(ids(&catalog.products_by_category(ProductCategory::All)), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_concrete_category_is_order_preserving_subsequence() {
        let catalog = catalog();
        assert_eq!(ids(&catalog.products_by_category(ProductCategory::Devices)), vec![0, 2]);
        assert_eq!(ids(&catalog.products_by_category(ProductCategory::Living)), vec![1]);
        assert!(catalog
            .products_by_category(ProductCategory::Miscellaneous)
            .is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let mut catalog = catalog();
        catalog.add_product(product(1, ProductCategory::Living)).unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(ids(&catalog.products_by_category(ProductCategory::Living)), vec![1, 1]);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut catalog = catalog();
        let broken = Product::new(9, "broken", ProductCategory::Living, Price::from_cents(-5));
        assert!(catalog.add_product(broken).is_err());
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_find() {
        let catalog = catalog();
        assert_eq!(
            catalog.find(ProductId::new(2)).map(|p| p.category()),
            Some(ProductCategory::Devices)
        );
        assert!(catalog.find(ProductId::new(42)).is_none());
    }
}
