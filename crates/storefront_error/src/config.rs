//! Configuration errors.
//!
//! Covers the layered TOML settings: a source that cannot be read, values
//! of the wrong shape, and settings that are individually valid but
//! contradict each other.

/// Why configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration source could not be read or merged
    #[display("Failed to read configuration: {}", _0)]
    Source(String),
    /// Merged values do not fit the settings structure
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
    /// A setting is out of range or contradicts another
    #[display("Invalid setting: {}", _0)]
    Invalid(String),
    /// No snapshot directory was configured and the platform has none
    #[display("No platform data directory; set store.data_dir")]
    NoDataDir,
}

/// Configuration error with the location that raised it.
///
/// # Examples
///
/// ```
/// use storefront_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Invalid(
///     "chart.top_n must be at least 1".to_string(),
/// ));
/// assert!(format!("{}", err).contains("Invalid setting: chart.top_n"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// Why configuration was rejected
    pub kind: ConfigErrorKind,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Create a configuration error at the caller's location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
