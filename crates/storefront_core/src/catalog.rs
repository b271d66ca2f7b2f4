//! The in-memory ordered product list.

use crate::Product;
use serde::{Deserialize, Serialize};

/// Ordered sequence of products; insertion order is display order.
///
/// Serializes as a bare JSON array, which is the snapshot format.
///
/// # Examples
///
/// ```
/// use storefront_core::{Catalog, Product};
///
/// let mut catalog = Catalog::default();
/// catalog.push(Product::builder().id(1u32).title("Mug").price(4.5).build().unwrap());
///
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.remove(5).is_none());
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog holding the given products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Product at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Replace the whole contents. Nothing of the previous list survives.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Append a product at the end.
    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Remove the product at `index`.
    ///
    /// Out-of-range indices leave the catalog untouched and return `None`.
    pub fn remove(&mut self, index: usize) -> Option<Product> {
        (index < self.products.len()).then(|| self.products.remove(index))
    }

    /// Consume the catalog, returning its products.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}
