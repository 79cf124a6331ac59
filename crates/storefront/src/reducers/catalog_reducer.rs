//! Catalog Reducer

use crate::actions::CatalogAction;
use crate::state::CatalogState;

pub fn reduce_catalog(mut state: CatalogState, action: &CatalogAction) -> CatalogState {
    match action {
        CatalogAction::AddProduct(product) => {
            let id = product.id();
            match state.add_product(product.clone()) {
                Ok(()) => log::debug!("Added product {} to catalog", id),
                Err(e) => log::warn!("Rejected product {}: {}", id, e),
            }
        }
    }
    state
}
