//! Selection State
//!
//! Transient UI-adjacent state: current category, expanded product card and theme.

use crate::domain_models::{ProductCategory, ProductId};

/// Which product card is expanded, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpandedItem {
    #[default]
    None,
    Expanded(ProductId),
}

impl ExpandedItem {
    /// Collapse if `id` is the expanded card, otherwise expand `id`
    pub fn toggle(self, id: ProductId) -> Self {
        match self {
            ExpandedItem::Expanded(current) if current == id => ExpandedItem::None,
            _ => ExpandedItem::Expanded(id),
        }
    }

    pub fn id(&self) -> Option<ProductId> {
        match self {
            ExpandedItem::None => None,
            ExpandedItem::Expanded(id) => Some(*id),
        }
    }

    pub fn is_expanded(&self, id: ProductId) -> bool {
        self.id() == Some(id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub current_category: ProductCategory,
    pub expanded_item: ExpandedItem,
    pub dark_mode: bool,
}

impl SelectionState {
    /// Switch category; always collapses the expanded card
    pub fn select_category(&mut self, category: ProductCategory) {
        self.current_category = category;
        self.expanded_item = ExpandedItem::None;
    }

    pub fn select_next_category(&mut self) {
        self.select_category(self.current_category.next());
    }

    pub fn select_previous_category(&mut self) {
        self.select_category(self.current_category.prev());
    }

    pub fn set_expanded_item(&mut self, id: ProductId) {
        self.expanded_item = self.expanded_item.toggle(id);
    }

    pub fn set_dark_mode(&mut self, on: bool) {
        self.dark_mode = on;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ProductId = ProductId::new(3);
    const B: ProductId = ProductId::new(4);

    #[test]
    fn test_toggle_law() {
        let mut selection = SelectionState::default();

        selection.set_expanded_item(A);
        assert_eq!(selection.expanded_item, ExpandedItem::Expanded(A));

        selection.set_expanded_item(A);
        assert_eq!(selection.expanded_item, ExpandedItem::None);
    }

    #[test]
    fn test_single_expansion() {
        let mut selection = SelectionState::default();
        selection.set_expanded_item(A);
        selection.set_expanded_item(B);

        assert!(selection.expanded_item.is_expanded(B));
        assert!(!selection.expanded_item.is_expanded(A));
    }

    #[test]
    fn test_select_category_collapses() {
        let mut selection = SelectionState::default();
        selection.set_expanded_item(A);

        selection.select_category(ProductCategory::Devices);
        assert_eq!(selection.current_category, ProductCategory::Devices);
        assert_eq!(selection.expanded_item, ExpandedItem::None);

        // Already collapsed stays collapsed
        selection.select_category(ProductCategory::Devices);
        assert_eq!(selection.expanded_item, ExpandedItem::None);
    }

    #[test]
    fn test_category_cycling_collapses() {
        let mut selection = SelectionState::default();
        selection.set_expanded_item(A);

        selection.select_previous_category();
        assert_eq!(selection.current_category, ProductCategory::Miscellaneous);
        assert_eq!(selection.expanded_item, ExpandedItem::None);

        selection.select_next_category();
        assert_eq!(selection.current_category, ProductCategory::All);
    }

    #[test]
    fn test_dark_mode() {
        let mut selection = SelectionState::default();
        assert!(!selection.dark_mode);

        selection.set_dark_mode(true);
        assert!(selection.dark_mode);

        selection.toggle_dark_mode();
        assert!(!selection.dark_mode);
    }
}
