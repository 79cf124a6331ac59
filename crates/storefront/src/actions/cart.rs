//! Actions for the shopping cart.

use crate::domain_models::{Product, ProductId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of the product
    Add(Product),

    /// Remove one unit of the product (no-op if absent)
    Remove(ProductId),

    /// Settle the purchase: clears the whole cart
    Checkout,
}
