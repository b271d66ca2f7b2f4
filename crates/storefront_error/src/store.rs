//! Snapshot store error types.

/// Kinds of snapshot store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// Failed to create the store directory
    #[display("Failed to create store directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to read a snapshot
    #[display("Failed to read snapshot: {}", _0)]
    FileRead(String),
    /// Failed to write a snapshot
    #[display("Failed to write snapshot: {}", _0)]
    FileWrite(String),
    /// Key contains characters the backend cannot map to a location
    #[display("Invalid store key: {}", _0)]
    InvalidKey(String),
    /// Store backend is unavailable
    #[display("Store unavailable: {}", _0)]
    Unavailable(String),
}

/// Snapshot store error with location tracking.
///
/// # Examples
///
/// ```
/// use storefront_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::InvalidKey("../etc".to_string()));
/// assert!(format!("{}", err).contains("Invalid store key"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
