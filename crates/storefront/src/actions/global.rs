//! Session-wide actions.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalAction {
    /// Empty cart and wish list, restore default category and expansion.
    /// The seeded catalog and the theme survive.
    Reset,
}
