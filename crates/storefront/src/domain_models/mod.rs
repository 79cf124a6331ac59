//! Domain models
//!
//! Core domain types used throughout the store.
//! These are pure domain concepts, separate from UI selection state.

pub mod price;
pub mod product;
pub mod product_category;
pub mod product_id;

pub use price::Price;
pub use product::Product;
pub use product_category::ProductCategory;
pub use product_id::ProductId;
