//! Top-level error wrapper types.

use crate::{ConfigError, HttpError, JsonError, StoreError, TuiError};

/// Every error condition a Storefront operation can report.
///
/// # Examples
///
/// ```
/// use storefront_error::{HttpError, StorefrontError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: StorefrontError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StorefrontErrorKind {
    /// Network failure talking to the remote catalog
    #[from(HttpError)]
    Http(HttpError),
    /// Malformed or unexpected JSON
    #[from(JsonError)]
    Json(JsonError),
    /// Local snapshot store failure
    #[from(StoreError)]
    Store(StoreError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Terminal UI error
    #[from(TuiError)]
    Tui(TuiError),
}

/// Storefront error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storefront_error::{JsonError, JsonErrorKind, StorefrontErrorKind, StorefrontResult};
///
/// fn parse() -> StorefrontResult<()> {
///     Err(JsonError::new(JsonErrorKind::ProductList("expected `[`".to_string())))?
/// }
///
/// let err = parse().unwrap_err();
/// assert!(matches!(err.kind(), StorefrontErrorKind::Json(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storefront Error: {}", _0)]
pub struct StorefrontError(Box<StorefrontErrorKind>);

impl StorefrontError {
    /// Create a new error from a kind.
    pub fn new(kind: StorefrontErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorefrontErrorKind {
        &self.0
    }

    /// Whether this error came from the network layer.
    pub fn is_network(&self) -> bool {
        matches!(*self.0, StorefrontErrorKind::Http(_))
    }

    /// Whether this error came from decoding a payload.
    pub fn is_deserialization(&self) -> bool {
        matches!(*self.0, StorefrontErrorKind::Json(_))
    }
}

// Generic From implementation for any type that converts to StorefrontErrorKind
impl<T> From<T> for StorefrontError
where
    T: Into<StorefrontErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storefront operations.
///
/// # Examples
///
/// ```
/// use storefront_error::{StoreError, StoreErrorKind, StorefrontResult};
///
/// fn save() -> StorefrontResult<()> {
///     Err(StoreError::new(StoreErrorKind::Unavailable("disk full".to_string())))?
/// }
/// ```
pub type StorefrontResult<T> = std::result::Result<T, StorefrontError>;
