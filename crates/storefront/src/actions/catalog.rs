//! Actions for the product catalog.

use crate::domain_models::Product;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    /// Append a product (seeding only); products with a negative price are dropped
    AddProduct(Product),
}
