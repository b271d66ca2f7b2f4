//! Catalog payload decoding errors.
//!
//! Raised when a remote response or the stored snapshot is not a valid
//! catalog document. The synchronizer reports these as failed fetches and
//! leaves the catalog as it was.

/// What was being encoded or decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum JsonErrorKind {
    /// Product list could not be serialized
    #[display("Failed to encode products: {}", _0)]
    Encode(String),
    /// Body was not a JSON array of complete products
    #[display("Malformed product list: {}", _0)]
    ProductList(String),
    /// Body was not a single complete product object
    #[display("Malformed product: {}", _0)]
    Product(String),
}

/// Catalog JSON error with the location that raised it.
///
/// # Examples
///
/// ```
/// use storefront_error::{JsonError, JsonErrorKind};
///
/// let err = JsonError::new(JsonErrorKind::Product("missing field `title`".to_string()));
/// assert!(format!("{}", err).contains("Malformed product: missing field `title`"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", kind, line, file)]
pub struct JsonError {
    /// Which payload failed
    pub kind: JsonErrorKind,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl JsonError {
    /// Create a JSON error at the caller's location.
    #[track_caller]
    pub fn new(kind: JsonErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
