//! Remote product catalog client.
//!
//! The catalog exposes two read-only endpoints:
//! - `GET {base_url}/products` returns a JSON array of products
//! - `GET {base_url}/products/{id}` returns one JSON product
//!
//! Clients return the raw response body; decoding is the caller's job so
//! that a malformed payload can be rejected without touching any state.
//! There is no retry: a failed call is reported once and the caller decides
//! whether to try again.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;

pub use http::HttpCatalogClient;

use storefront_error::StorefrontResult;

/// Source of raw catalog payloads.
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch the whole product list body.
    async fn fetch_all(&self) -> StorefrontResult<String>;

    /// Fetch one product body by id.
    async fn fetch_one(&self, id: u32) -> StorefrontResult<String>;
}

#[async_trait::async_trait]
impl<T: CatalogClient + ?Sized> CatalogClient for std::sync::Arc<T> {
    async fn fetch_all(&self) -> StorefrontResult<String> {
        (**self).fetch_all().await
    }

    async fn fetch_one(&self, id: u32) -> StorefrontResult<String> {
        (**self).fetch_one(id).await
    }
}
