//! Selection Reducer
//!
//! Handles category selection, card expansion and theme.

use crate::actions::SelectionAction;
use crate::state::SelectionState;

pub fn reduce_selection(mut state: SelectionState, action: &SelectionAction) -> SelectionState {
    match action {
        SelectionAction::SelectCategory(category) => {
            state.select_category(*category);
        }
        SelectionAction::SelectNextCategory => {
            state.select_next_category();
        }
        SelectionAction::SelectPreviousCategory => {
            state.select_previous_category();
        }
        SelectionAction::ToggleExpanded(id) => {
            state.set_expanded_item(*id);
        }
        SelectionAction::SetDarkMode(on) => {
            state.set_dark_mode(*on);
        }
        SelectionAction::ToggleDarkMode => {
            state.toggle_dark_mode();
        }
    }
    log::debug!(
        "Selection: category={:?} expanded={:?} dark_mode={}",
        state.current_category,
        state.expanded_item,
        state.dark_mode
    );
    state
}
