//! Cart Reducer
//!
//! Handles cart mutations and checkout settlement.

use crate::actions::CartAction;
use crate::state::CartState;

pub fn reduce_cart(mut state: CartState, action: &CartAction) -> CartState {
    match action {
        CartAction::Add(product) => {
            state.add(product);
            log::debug!(
                "Cart: {} x {}",
                state.quantity_of(product.id()),
                product.name()
            );
        }
        CartAction::Remove(id) => {
            state.remove(*id);
            log::debug!("Cart: {} x {}", state.quantity_of(*id), id);
        }
        CartAction::Checkout => {
            if state.is_empty() {
                log::debug!("Checkout on empty cart, nothing to settle");
            } else {
                log::info!(
                    "Checkout: settled {} items for a total of {:.2}",
                    state.item_count(),
                    state.total()
                );
                state.checkout();
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{Price, Product, ProductCategory};
    use rust_decimal::Decimal;

    fn speakers() -> Product {
        Product::new(7, "Speakers", ProductCategory::Devices, Price::from_cents(7924))
    }

    #[test]
    fn test_add_and_remove() {
        let state = reduce_cart(CartState::default(), &CartAction::Add(speakers()));
        let state = reduce_cart(state, &CartAction::Add(speakers()));
        assert_eq!(state.quantity_of(speakers().id()), 2);

        let state = reduce_cart(state, &CartAction::Remove(speakers().id()));
        assert_eq!(state.quantity_of(speakers().id()), 1);
        assert_eq!(state.total(), Decimal::new(7924, 2));
    }

    #[test]
    fn test_checkout() {
        let state = reduce_cart(CartState::default(), &CartAction::Add(speakers()));
        let state = reduce_cart(state, &CartAction::Checkout);
        assert_eq!(state.item_count(), 0);
        assert_eq!(state.total(), Decimal::ZERO);
    }
}
