//! Wish list middleware
//!
//! Moving a product from the wish list into the cart is not a primitive of
//! either slice. This middleware consumes `WishListAction::MoveToCart` and
//! dispatches the two primitives in order. They are independent actions:
//! subscribers observe the removal before the cart update.

use crate::actions::{Action, CartAction, WishListAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct WishListMiddleware;

impl WishListMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for WishListMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::WishList(WishListAction::MoveToCart(product)) = action else {
            return true;
        };

        if !state.wish_list.contains(product.id()) {
            log::debug!(
                "{} is not on the wish list, adding it to the cart anyway",
                product.id()
            );
        }

        dispatcher.dispatch(Action::WishList(WishListAction::Remove(product.id())));
        dispatcher.dispatch(Action::Cart(CartAction::Add(product.clone())));
        false
    }
}
