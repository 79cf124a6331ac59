//! Wish List Reducer

use crate::actions::WishListAction;
use crate::state::WishListState;

pub fn reduce_wish_list(mut state: WishListState, action: &WishListAction) -> WishListState {
    match action {
        WishListAction::Add(product) => {
            state.add(product);
        }
        WishListAction::Remove(id) => {
            state.remove(*id);
        }
        WishListAction::MoveToCart(_) => {
            // that is a compound operation handled by middleware
        }
    }
    state
}
