//! Actions for category selection, card expansion and theme.

use crate::domain_models::{ProductCategory, ProductId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Select a category (collapses the expanded card)
    SelectCategory(ProductCategory),
    SelectNextCategory,
    SelectPreviousCategory,

    /// Expand the card, or collapse it if it is the expanded one
    ToggleExpanded(ProductId),

    SetDarkMode(bool),
    ToggleDarkMode,
}
