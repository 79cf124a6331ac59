//! Cart State
//!
//! Quantity-bearing collection of products selected for purchase.
//! Lines are keyed by `ProductId` and kept in first-insertion order.

use rust_decimal::Decimal;

use crate::domain_models::{Product, ProductId};

/// One product in the cart together with how many of it were added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Always at least 1
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn subtotal(&self) -> Decimal {
        self.product.price() * self.quantity
    }
}

/// Shopping cart
///
/// Invariant: no line is ever held with a quantity of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    /// Add one unit of `product`, inserting a new line if needed
    ///
    /// The line keeps the product it was first added with. A line saturates
    /// at `u32::MAX` units; further adds leave it unchanged.
    pub fn add(&mut self, product: &Product) {
        match self.line_mut(product.id()) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            }),
        }
    }

    /// Remove one unit of the product; the line disappears once it reaches zero
    pub fn remove(&mut self, id: ProductId) {
        let Some(index) = self.position(id) else {
            return;
        };
        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
    }

    /// How many units of the product are in the cart (0 if absent)
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.position(id)
            .map(|index| self.lines[index].quantity)
            .unwrap_or(0)
    }

    /// Sum of price times quantity over all lines, recomputed on every call
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities (not the number of distinct products)
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Number of distinct products in the cart
    pub fn distinct_count(&self) -> usize {
        self.lines.len()
    }

    /// Settle the purchase by clearing every line
    pub fn checkout(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.product.id() == id)
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product.id() == id)
    }
}
