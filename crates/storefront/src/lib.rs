//! Storefront state store
//!
//! The single source of truth of the storefront demo: product catalog, cart,
//! wish list and selection state (category, expanded card, theme).
//!
//! All changes travel the same path: an [`Action`] is dispatched to the
//! [`Store`], passes the middleware chain, is reduced into a new [`AppState`]
//! and finally announced to every subscriber.
//!
//! ```
//! use storefront::actions::CartAction;
//! use storefront::domain_models::{Price, Product, ProductCategory};
//! use storefront::Store;
//!
//! let bread = Product::new(0, "Bread", ProductCategory::Products, Price::from_cents(219));
//!
//! let mut store = Store::default();
//! store.add_product(bread.clone()).unwrap();
//! store.dispatch(CartAction::Add(bread.clone()));
//!
//! assert_eq!(store.state().cart.quantity_of(bread.id()), 1);
//! ```

pub mod actions;
pub mod demo_data;
pub mod dispatcher;
pub mod domain_models;
pub mod error;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;

pub use actions::Action;
pub use error::{StoreError, ValidationError};
pub use state::AppState;
pub use store::{Store, SubscriptionId};
