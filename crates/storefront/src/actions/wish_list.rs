//! Actions for the wish list.

use crate::domain_models::{Product, ProductId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishListAction {
    /// Add the product unless already present
    Add(Product),

    /// Remove the product (no-op if absent)
    Remove(ProductId),

    /// Move the product into the cart.
    /// Expanded by middleware into `WishListAction::Remove` followed by `CartAction::Add`.
    MoveToCart(Product),
}
