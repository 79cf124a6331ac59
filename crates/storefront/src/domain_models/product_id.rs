//! Product ID model
//!
//! Type-safe wrapper for catalog product identifiers.

/// Newtype wrapper for product identifiers, providing type safety.
///
/// Cart and wish list entries are keyed by this id, never by the full product value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(i64);

impl ProductId {
    pub const fn new(value: i64) -> Self {
        ProductId(value)
    }

    /// Get the raw value (for display, parsing round trips etc.)
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId(value)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
