//! Wish List State

use crate::domain_models::{Product, ProductId};

/// Set of products of interest, keyed by `ProductId`, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishListState {
    products: Vec<Product>,
}

impl WishListState {
    /// Insert the product unless one with the same id is already present
    pub fn add(&mut self, product: &Product) {
        if !self.contains(product.id()) {
            self.products.push(product.clone());
        }
    }

    pub fn remove(&mut self, id: ProductId) {
        self.products.retain(|product| product.id() != id);
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.iter().any(|product| product.id() == id)
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
