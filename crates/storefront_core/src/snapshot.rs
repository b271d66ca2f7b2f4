//! JSON codec for product payloads and persisted snapshots.
//!
//! The remote list endpoint and the local snapshot share one format: a JSON
//! array of product objects. The single-product endpoint returns one bare
//! object. Unknown fields are ignored; missing fields fail the whole decode.

use crate::Product;
use storefront_error::{JsonError, JsonErrorKind, StorefrontResult};

/// Encode products as a JSON array.
#[tracing::instrument(skip(products), fields(count = products.len()))]
pub fn encode_products(products: &[Product]) -> StorefrontResult<String> {
    Ok(serde_json::to_string(products)
        .map_err(|e| JsonError::new(JsonErrorKind::Encode(e.to_string())))?)
}

/// Decode a JSON array of products.
///
/// # Errors
///
/// Returns [`JsonError`] for malformed JSON, a non-array document, or any
/// element missing a required field.
#[tracing::instrument(skip(body), fields(bytes = body.len()))]
pub fn decode_products(body: &str) -> StorefrontResult<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(body)
        .map_err(|e| JsonError::new(JsonErrorKind::ProductList(e.to_string())))?;
    tracing::debug!(count = products.len(), "Decoded product list");
    Ok(products)
}

/// Decode a single JSON product object.
#[tracing::instrument(skip(body), fields(bytes = body.len()))]
pub fn decode_product(body: &str) -> StorefrontResult<Product> {
    Ok(serde_json::from_str(body)
        .map_err(|e| JsonError::new(JsonErrorKind::Product(e.to_string())))?)
}
