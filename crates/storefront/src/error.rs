//! Errors raised at the store's validating boundary.
//!
//! Reducers never fail; only products entering the catalog are checked.

use crate::domain_models::{Price, ProductId};
use thiserror::Error;

/// A product that cannot be admitted to the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Product {id} has a negative price ({price})")]
    NegativePrice { id: ProductId, price: Price },
}

/// Errors returned by the `Store` facade
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid product: {0}")]
    Validation(#[from] ValidationError),

    /// A middleware consumed the insertion before it reached the reducer
    #[error("Product {0} did not reach the catalog")]
    NotAdded(ProductId),
}
