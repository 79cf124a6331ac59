//! Product category model
//!
//! Categories used to browse the catalog.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// Category of a product; `All` is the browsing wildcard
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    Eq,
    PartialEq,
    Hash,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ProductCategory {
    /// Matches every product; never assigned to a real product
    #[default]
    All,
    Products,
    Devices,
    Living,
    Miscellaneous,
}

impl ProductCategory {
    /// Check if a product of category `category` is visible under this filter
    pub fn matches(&self, category: ProductCategory) -> bool {
        match self {
            ProductCategory::All => true,
            other => *other == category,
        }
    }

    /// Get the display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::All => "All Categories",
            ProductCategory::Products => "Products",
            ProductCategory::Devices => "Devices",
            ProductCategory::Living => "Living",
            ProductCategory::Miscellaneous => "Miscellaneous",
        }
    }

    /// Cycle to the next category
    pub fn next(&self) -> Self {
        match self {
            ProductCategory::All => ProductCategory::Products,
            ProductCategory::Products => ProductCategory::Devices,
            ProductCategory::Devices => ProductCategory::Living,
            ProductCategory::Living => ProductCategory::Miscellaneous,
            ProductCategory::Miscellaneous => ProductCategory::All,
        }
    }

    /// Cycle to the previous category
    pub fn prev(&self) -> Self {
        match self {
            ProductCategory::All => ProductCategory::Miscellaneous,
            ProductCategory::Products => ProductCategory::All,
            ProductCategory::Devices => ProductCategory::Products,
            ProductCategory::Living => ProductCategory::Devices,
            ProductCategory::Miscellaneous => ProductCategory::Living,
        }
    }

    /// All categories in declaration order, wildcard first
    pub fn all() -> impl Iterator<Item = ProductCategory> {
        ProductCategory::iter()
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
