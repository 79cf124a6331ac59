//! Application State

use std::str::FromStr;

use storefront_config::StorefrontConfig;

use crate::domain_models::{Product, ProductCategory};

use super::{CartState, CatalogState, SelectionState, WishListState};

/// Application state: the single source of truth of the storefront
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub catalog: CatalogState,
    pub cart: CartState,
    pub wish_list: WishListState,
    pub selection: SelectionState,
}

impl AppState {
    /// Initial state honouring the startup preferences
    ///
    /// An unknown `default_category` falls back to `All`.
    pub fn from_config(config: &StorefrontConfig) -> Self {
        let current_category = ProductCategory::from_str(&config.default_category)
            .unwrap_or_else(|_| {
                log::warn!(
                    "Unknown default category '{}', using '{}'",
                    config.default_category,
                    ProductCategory::All
                );
                ProductCategory::All
            });

        let mut state = Self::default();
        state.selection.current_category = current_category;
        state.selection.dark_mode = config.dark_mode;
        state
    }

    /// Products listed under the currently selected category
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog
            .products_by_category(self.selection.current_category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = StorefrontConfig {
            dark_mode: true,
            default_category: "Living".to_string(),
            ..StorefrontConfig::default()
        };
        let state = AppState::from_config(&config);
        assert!(state.selection.dark_mode);
        assert_eq!(state.selection.current_category, ProductCategory::Living);
        assert!(state.catalog.is_empty());
    }

    #[test]
    fn test_from_config_unknown_category() {
        let config = StorefrontConfig {
            default_category: "groceries".to_string(),
            ..StorefrontConfig::default()
        };
        let state = AppState::from_config(&config);
        assert_eq!(state.selection.current_category, ProductCategory::All);
    }
}
