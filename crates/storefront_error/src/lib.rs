//! Error types for the Storefront catalog client.
//!
//! Every error follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind (or a message) with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! The three failure classes the synchronizer distinguishes map onto:
//! - [`HttpError`]: network failure (transport error or non-success status)
//! - [`JsonError`]: deserialization failure (malformed or unexpected JSON)
//! - [`StoreError`]: local persistence failure
//!
//! # Examples
//!
//! ```
//! use storefront_error::{HttpError, StorefrontResult};
//!
//! fn fetch_catalog() -> StorefrontResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! assert!(fetch_catalog().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod json;
mod store;
mod tui;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{StorefrontError, StorefrontErrorKind, StorefrontResult};
pub use http::HttpError;
pub use json::{JsonError, JsonErrorKind};
pub use store::{StoreError, StoreErrorKind};
pub use tui::{TuiError, TuiErrorKind};
