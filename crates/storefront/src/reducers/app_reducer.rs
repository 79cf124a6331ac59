use crate::actions::{Action, GlobalAction};
use crate::reducers::{cart_reducer, catalog_reducer, selection_reducer, wish_list_reducer};
use crate::state::{AppState, CartState, SelectionState, WishListState};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that routes tagged actions to the slice reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Reset) => {
            log::info!("Resetting session (catalog and theme are kept)");
            state.cart = CartState::default();
            state.wish_list = WishListState::default();
            state.selection = SelectionState {
                dark_mode: state.selection.dark_mode,
                ..SelectionState::default()
            };
        }
        Action::Catalog(catalog_action) => {
            state.catalog = catalog_reducer::reduce_catalog(state.catalog, catalog_action);
        }
        Action::Cart(cart_action) => {
            state.cart = cart_reducer::reduce_cart(state.cart, cart_action);
        }
        Action::WishList(wish_list_action) => {
            state.wish_list =
                wish_list_reducer::reduce_wish_list(state.wish_list, wish_list_action);
        }
        Action::Selection(selection_action) => {
            state.selection =
                selection_reducer::reduce_selection(state.selection, selection_action);
        }
        Action::None => {}
    }

    state
}
