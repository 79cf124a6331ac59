//! Application State Module
//!
//! Contains all state types of the store, organized by slice.

mod app;
mod cart;
mod catalog;
mod selection;
mod wish_list;

pub use app::AppState;
pub use cart::{CartLine, CartState};
pub use catalog::CatalogState;
pub use selection::{ExpandedItem, SelectionState};
pub use wish_list::WishListState;
