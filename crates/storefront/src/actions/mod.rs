//! Actions module
//!
//! Every state change of the store is described by an action, tagged by the
//! slice of state it targets:
//! - `Global`: affects the whole session
//! - `Catalog`, `Cart`, `WishList`, `Selection`: handled by the matching reducer

pub mod cart;
pub mod catalog;
pub mod global;
pub mod selection;
pub mod wish_list;

pub use cart::CartAction;
pub use catalog::CatalogAction;
pub use global::GlobalAction;
pub use selection::SelectionAction;
pub use wish_list::WishListAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Session-wide actions
    Global(GlobalAction),
    /// Product registry actions
    Catalog(CatalogAction),
    /// Shopping cart actions
    Cart(CartAction),
    /// Wish list actions
    WishList(WishListAction),
    /// Category, expanded card and theme actions
    Selection(SelectionAction),

    /// No-op action
    None,
}

impl From<GlobalAction> for Action {
    fn from(action: GlobalAction) -> Self {
        Action::Global(action)
    }
}

impl From<CatalogAction> for Action {
    fn from(action: CatalogAction) -> Self {
        Action::Catalog(action)
    }
}

impl From<CartAction> for Action {
    fn from(action: CartAction) -> Self {
        Action::Cart(action)
    }
}

impl From<WishListAction> for Action {
    fn from(action: WishListAction) -> Self {
        Action::WishList(action)
    }
}

impl From<SelectionAction> for Action {
    fn from(action: SelectionAction) -> Self {
        Action::Selection(action)
    }
}
