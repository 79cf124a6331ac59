//! Product model
//!
//! Products are immutable once built: fields are private and only exposed through getters.

use super::{Price, ProductCategory, ProductId};
use crate::error::ValidationError;

const DEFAULT_DESCRIPTION: &str = "<no description yet>";
const DEFAULT_IMAGE: &str = "blank.svg";

/// A catalog product
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    id: ProductId,
    name: String,
    category: ProductCategory,
    description: String,
    price: Price,
    image: String,
}

impl Product {
    /// Create a product with a placeholder description and image
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: ProductCategory,
        price: Price,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category,
            description: DEFAULT_DESCRIPTION.to_string(),
            price,
            image: DEFAULT_IMAGE.to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference. The store never interprets it.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ProductCategory {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Check that the product may enter the catalog
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.price.is_negative() {
            return Err(ValidationError::NegativePrice {
                id: self.id,
                price: self.price,
            });
        }
        Ok(())
    }
}
