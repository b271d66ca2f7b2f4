//! Notifications emitted by the synchronizer.

use crate::FetchKind;
use storefront_core::Product;

/// Where a full catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum LoadSource {
    /// The persisted snapshot
    #[display("local snapshot")]
    Store,
    /// The remote catalog endpoint
    #[display("remote catalog")]
    Remote,
}

/// One-shot user-visible message.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The catalog was (re)populated
    Loaded {
        /// Origin of the products
        source: LoadSource,
        /// Number of products now in the catalog
        count: usize,
    },
    /// A product was appended
    Added {
        /// Title of the new product
        title: String,
    },
    /// A product was removed
    Removed {
        /// Title of the removed product
        title: String,
    },
    /// A fetch or its decoding failed; nothing changed
    FetchFailed {
        /// Which fetch failed
        kind: FetchKind,
        /// Error description
        message: String,
    },
    /// The catalog changed in memory but the snapshot could not be written
    PersistFailed {
        /// Error description
        message: String,
    },
}

impl Notice {
    /// Whether this notice reports a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::FetchFailed { .. } | Notice::PersistFailed { .. })
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Loaded { source, count } => {
                write!(f, "Products loaded: {} from {}", count, source)
            }
            Notice::Added { title } => write!(f, "Product added: {}", title),
            Notice::Removed { title } => write!(f, "Product removed: {}", title),
            Notice::FetchFailed {
                kind: FetchKind::All,
                ..
            } => write!(f, "Error loading products"),
            Notice::FetchFailed {
                kind: FetchKind::One(id),
                ..
            } => write!(f, "Error adding product {}", id),
            Notice::PersistFailed { .. } => write!(f, "Products could not be saved"),
        }
    }
}

/// Receives catalog changes and notices from the synchronizer.
///
/// `products_changed` always fires before the snapshot is written, and a
/// notice for the same operation always fires after it.
pub trait CatalogListener {
    /// The catalog now holds exactly `products`; redraw everything.
    fn products_changed(&mut self, products: &[Product]);

    /// Show a one-shot message.
    fn notice(&mut self, notice: Notice);
}

/// Listener that only logs, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogListener;

impl CatalogListener for LogListener {
    fn products_changed(&mut self, products: &[Product]) {
        tracing::debug!(count = products.len(), "Catalog changed");
    }

    fn notice(&mut self, notice: Notice) {
        if notice.is_failure() {
            tracing::warn!(notice = ?notice, "{}", notice);
        } else {
            tracing::info!("{}", notice);
        }
    }
}
