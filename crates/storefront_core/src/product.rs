//! Product records as served by the remote catalog.

use serde::{Deserialize, Serialize};

/// Customer rating attached to a product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, conventionally 0 to 5
    pub rate: f64,
    /// Number of ratings behind the average
    pub count: u32,
}

/// One catalog item.
///
/// The field names match the remote wire format, so a product decodes from
/// and encodes to the same JSON object the endpoint returns.
///
/// # Examples
///
/// ```
/// use storefront_core::{Product, Rating};
///
/// let product = Product::builder()
///     .id(1u32)
///     .title("Backpack")
///     .price(109.95)
///     .rating(Rating { rate: 3.9, count: 120 })
///     .build()
///     .unwrap();
///
/// assert_eq!(product.title, "Backpack");
/// assert!(product.category.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Product {
    /// Identifier, unique within a loaded list
    pub id: u32,
    /// Display name
    pub title: String,
    /// Unit price, non-negative
    pub price: f64,
    /// Free-text description
    #[builder(default)]
    pub description: String,
    /// Free-text category
    #[builder(default)]
    pub category: String,
    /// Image URL; never resolved by this crate
    #[builder(default)]
    pub image: String,
    /// Customer rating
    #[builder(default)]
    pub rating: Rating,
}

impl Product {
    /// Start building a product.
    pub fn builder() -> ProductBuilder {
        ProductBuilder::default()
    }
}
