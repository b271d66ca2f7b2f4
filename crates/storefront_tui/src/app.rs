//! Application state and key handling.

use crate::ProductListAdapter;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use storefront_core::{ChartConfig, ChartPoint, Product, RatingFormatter, project};
use storefront_sync::{CatalogListener, Notice};
use tokio::sync::mpsc;

/// Which view is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Product table
    List,
    /// Top-rated bar chart
    Chart,
    /// Actions for one row
    ContextMenu {
        /// Row the menu was opened on
        index: usize,
    },
}

/// Catalog operation requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Fetch a product with a random id and append it
    AddRandom,
    /// Append a locally generated product
    AddStub,
    /// Re-fetch the whole catalog
    Refresh,
    /// Remove the product at this index
    Remove(usize),
}

/// Main application state.
pub struct App {
    /// Current mode
    pub mode: AppMode,
    /// Product table adapter
    pub adapter: ProductListAdapter,
    /// Last notice shown to the user
    pub status_message: String,
    /// Most recent failure, kept until the next catalog operation starts
    pub last_failure: Option<String>,
    /// Fetches in flight
    pub pending: usize,
    /// Whether to quit the application
    pub should_quit: bool,
    chart: ChartConfig,
    activations: mpsc::UnboundedReceiver<usize>,
}

impl App {
    /// Create an App with an empty table.
    pub fn new(chart: ChartConfig) -> Self {
        let (tx, activations) = mpsc::unbounded_channel();
        let on_activate = move |index: usize| {
            if tx.send(index).is_err() {
                tracing::debug!(index, "App gone, dropping row activation");
            }
        };
        Self {
            mode: AppMode::List,
            adapter: ProductListAdapter::new(Vec::new(), Some(on_activate)),
            status_message: String::from("Loading products..."),
            last_failure: None,
            pending: 0,
            should_quit: false,
            chart,
            activations,
        }
    }

    /// Chart settings in use.
    pub fn chart_config(&self) -> ChartConfig {
        self.chart
    }

    /// Bars for the chart view, computed from the current rows.
    pub fn chart_points(&self) -> Vec<ChartPoint> {
        project(
            self.adapter.products(),
            self.chart.top_n,
            self.chart.label_width,
            &RatingFormatter,
        )
    }

    /// Product the context menu was opened on, if it still exists.
    pub fn menu_product(&self) -> Option<&Product> {
        match self.mode {
            AppMode::ContextMenu { index } => self.adapter.products().get(index),
            _ => None,
        }
    }

    /// Text for the status bar.
    ///
    /// A failure stays visible even when a later notice from the same
    /// operation replaces the status.
    pub fn status_line(&self) -> String {
        match &self.last_failure {
            Some(failure) if *failure != self.status_message => {
                format!("{} | {}", failure, self.status_message)
            }
            _ => self.status_message.clone(),
        }
    }

    /// Handle one key press, returning the catalog operation it asks for.
    #[tracing::instrument(skip(self), fields(mode = ?self.mode))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        let action = self.dispatch_key(key);
        if action.is_some() {
            self.last_failure = None;
        }
        action
    }

    fn dispatch_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        match self.mode {
            AppMode::List => match key.code {
                KeyCode::Char('q') => self.quit(),
                KeyCode::Up | KeyCode::Char('k') => self.adapter.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => self.adapter.select_next(),
                KeyCode::Char('a') => return Some(Action::AddRandom),
                KeyCode::Char('s') => return Some(Action::AddStub),
                KeyCode::Char('r') => return Some(Action::Refresh),
                KeyCode::Char('c') => self.mode = AppMode::Chart,
                KeyCode::Enter => {
                    let selected = self.adapter.selected();
                    if self.adapter.activate(selected) {
                        self.drain_activations();
                    }
                }
                _ => {}
            },
            AppMode::Chart => match key.code {
                KeyCode::Char('q') => self.quit(),
                KeyCode::Esc | KeyCode::Char('c') => self.mode = AppMode::List,
                _ => {}
            },
            AppMode::ContextMenu { index } => match key.code {
                KeyCode::Char('d') => {
                    self.mode = AppMode::List;
                    return Some(Action::Remove(index));
                }
                KeyCode::Esc => self.mode = AppMode::List,
                KeyCode::Char('q') => self.quit(),
                _ => {}
            },
        }
        None
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn drain_activations(&mut self) {
        while let Ok(index) = self.activations.try_recv() {
            self.mode = AppMode::ContextMenu { index };
        }
    }
}

impl CatalogListener for App {
    fn products_changed(&mut self, products: &[Product]) {
        self.adapter.update_products(products.to_vec());
    }

    fn notice(&mut self, notice: Notice) {
        let message = notice.to_string();
        if notice.is_failure() {
            self.last_failure = Some(message.clone());
        }
        self.status_message = message;
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.mode)
            .field("adapter", &self.adapter)
            .field("status_message", &self.status_message)
            .field("last_failure", &self.last_failure)
            .field("pending", &self.pending)
            .field("should_quit", &self.should_quit)
            .finish()
    }
}
