//! Listener for command-line runs.

use storefront_core::Product;
use storefront_sync::{CatalogListener, Notice};

/// Prints notices the way the TUI shows them in its status bar and counts
/// failures so the process can exit non-zero.
#[derive(Debug, Default)]
pub struct ConsoleListener {
    failures: usize,
}

impl ConsoleListener {
    /// Failure notices seen so far.
    pub fn failures(&self) -> usize {
        self.failures
    }
}

impl CatalogListener for ConsoleListener {
    fn products_changed(&mut self, products: &[Product]) {
        tracing::debug!(count = products.len(), "Catalog changed");
    }

    fn notice(&mut self, notice: Notice) {
        if notice.is_failure() {
            self.failures += 1;
            tracing::warn!(notice = ?notice, "Operation failed");
            eprintln!("{}", notice);
        } else {
            println!("{}", notice);
        }
    }
}
