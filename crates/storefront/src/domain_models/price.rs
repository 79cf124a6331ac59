//! Price model
//!
//! Decimal-safe unit prices. Backed by `rust_decimal` so sums of cents never drift.

use rust_decimal::Decimal;
use std::ops::Mul;

/// Unit price of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    pub fn new(amount: Decimal) -> Self {
        Price(amount)
    }

    /// Build a price from an integer amount of cents, e.g. `from_cents(219)` is 2.19
    pub fn from_cents(cents: i64) -> Self {
        Price(Decimal::new(cents, 2))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Price(amount)
    }
}

/// Line subtotal: unit price times quantity
impl Mul<u32> for Price {
    type Output = Decimal;

    fn mul(self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
