//! Terminal User Interface for the product catalog.
//!
//! Shows the catalog as a table, a top-rated bar chart and a per-row action
//! menu. Built with ratatui for terminal rendering; catalog changes come in
//! through [`storefront_sync::CatalogListener`], which [`App`] implements.

mod adapter;
mod app;
pub mod chart;
mod events;
mod runner;
mod ui;

pub use adapter::{ProductListAdapter, ProductRow, RowActivation, stars};
pub use app::{Action, App, AppMode};
pub use events::{Event, spawn_event_reader};
pub use runner::{perform, run_tui};
pub use ui::draw;
