//! Core data types for the Storefront catalog client.
//!
//! This crate provides the product model, the in-memory catalog, the JSON
//! snapshot codec shared by the remote client and the local store, the
//! top-rated chart projection, and the layered configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
pub mod chart;
mod config;
mod product;
pub mod snapshot;

pub use catalog::Catalog;
pub use chart::{ChartPoint, PriceFormatter, RatingFormatter, ValueFormatter, project, top_rated};
pub use config::{CatalogConfig, ChartConfig, RemoteConfig, StoreConfig, StorefrontConfig};
pub use product::{Product, ProductBuilder, Rating};
pub use snapshot::{decode_product, decode_products, encode_products};
