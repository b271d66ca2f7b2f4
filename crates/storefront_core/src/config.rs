//! Layered TOML configuration.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from storefront.toml)
//! - User overrides (~/.config/storefront/storefront.toml, then ./storefront.toml)
//! - An explicit file passed on the command line, applied last

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use storefront_error::{ConfigError, ConfigErrorKind, StorefrontError, StorefrontResult};
use tracing::{debug, instrument};

// Bundled default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../storefront.toml");

/// Remote catalog endpoint settings.
///
/// ```toml
/// [remote]
/// base_url = "https://fakestoreapi.com"
/// user_agent = "storefront/0.1"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// Base URL; `/products` is appended
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout; client default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl RemoteConfig {
    /// Request timeout as a duration, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Local snapshot store settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct StoreConfig {
    /// Directory holding snapshot files; platform data dir when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Settings for adding products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Smallest id picked by "add a product"
    pub random_id_min: u32,
    /// Largest id picked by "add a product" (the remote catalog holds 20)
    pub random_id_max: u32,
}

/// Top-rated chart settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChartConfig {
    /// Number of bars
    pub top_n: usize,
    /// Maximum label length in characters, 0 for unlimited
    pub label_width: usize,
    /// Draw bars horizontally
    pub horizontal: bool,
}

/// Top-level Storefront configuration.
///
/// Loads from TOML files with a precedence system:
/// 1. Bundled defaults (storefront.toml shipped with the crate)
/// 2. ~/.config/storefront/storefront.toml
/// 3. ./storefront.toml
/// 4. An explicit override file
///
/// # Example
///
/// ```no_run
/// use storefront_core::StorefrontConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StorefrontConfig::load(None)?;
/// println!("Catalog endpoint: {}", config.remote.base_url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorefrontConfig {
    /// Remote endpoint
    pub remote: RemoteConfig,
    /// Local store
    #[serde(default)]
    pub store: StoreConfig,
    /// Product addition
    pub catalog: CatalogConfig,
    /// Chart rendering
    pub chart: ChartConfig,
}

impl StorefrontConfig {
    /// Bundled defaults only, ignoring any user files.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse, which indicates a
    /// packaging mistake.
    #[instrument]
    pub fn bundled() -> StorefrontResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .map_err(|e| build_error(&e))?;
        Self::finish(config)
    }

    /// Load configuration from a specific file path layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StorefrontResult<Self> {
        debug!("Loading configuration from file");

        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                StorefrontError::from(ConfigError::new(ConfigErrorKind::Source(format!(
                    "{}: {}",
                    path.as_ref().display(),
                    e
                ))))
            })?;
        Self::finish(config)
    }

    /// Load configuration with precedence: override > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped if not found; an
    /// explicit `override_path` must exist.
    #[instrument]
    pub fn load(override_path: Option<&Path>) -> StorefrontResult<Self> {
        debug!("Loading configuration with precedence: override > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storefront/storefront.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storefront").required(false));

        if let Some(path) = override_path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder.build().map_err(|e| build_error(&e))?;
        Self::finish(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> StorefrontResult<()> {
        if self.remote.base_url.trim().is_empty() {
            return Err(invalid("remote.base_url must not be empty"));
        }
        if self.catalog.random_id_min > self.catalog.random_id_max {
            return Err(invalid(format!(
                "catalog.random_id_min ({}) exceeds catalog.random_id_max ({})",
                self.catalog.random_id_min, self.catalog.random_id_max
            )));
        }
        if self.chart.top_n == 0 {
            return Err(invalid("chart.top_n must be at least 1"));
        }
        Ok(())
    }

    /// Directory for snapshot files.
    ///
    /// Uses `store.data_dir` when set, otherwise `{platform data dir}/storefront`.
    pub fn data_dir(&self) -> StorefrontResult<PathBuf> {
        if let Some(dir) = &self.store.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("storefront"))
            .ok_or_else(|| ConfigError::new(ConfigErrorKind::NoDataDir).into())
    }

    fn finish(config: Config) -> StorefrontResult<Self> {
        let parsed: Self = config.try_deserialize().map_err(|e| {
            StorefrontError::from(ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
        })?;
        parsed.validate()?;
        Ok(parsed)
    }
}

fn build_error(e: &config::ConfigError) -> StorefrontError {
    StorefrontError::from(ConfigError::new(ConfigErrorKind::Source(e.to_string())))
}

#[track_caller]
fn invalid(message: impl Into<String>) -> StorefrontError {
    StorefrontError::from(ConfigError::new(ConfigErrorKind::Invalid(message.into())))
}
