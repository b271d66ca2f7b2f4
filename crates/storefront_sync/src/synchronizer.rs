//! The catalog state machine.

use crate::{CatalogListener, LoadSource, Notice};
use rand::Rng;
use std::ops::RangeInclusive;
use std::sync::Arc;
use storefront_client::CatalogClient;
use storefront_core::{Catalog, Product, Rating, decode_product, decode_products, encode_products};
use storefront_error::{HttpError, StorefrontResult};
use storefront_store::{SNAPSHOT_KEY, SnapshotStore};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

const STUB_IMAGE: &str = "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg";

/// Whether the catalog has been populated yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum SyncState {
    /// Nothing loaded since start
    #[default]
    #[display("empty")]
    Empty,
    /// Populated from the store or the remote catalog
    #[display("loaded")]
    Loaded,
}

/// Which remote call a completion answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FetchKind {
    /// Whole product list
    #[display("all products")]
    All,
    /// One product by id
    #[display("product {}", _0)]
    One(u32),
}

/// Result of [`CatalogSynchronizer::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Catalog populated from the snapshot; no network call was made
    FromStore(usize),
    /// No usable snapshot; a full fetch was started with this ticket
    Fetching(u64),
}

#[derive(Debug)]
enum Fetched {
    List(Vec<Product>),
    Single(Product),
}

/// A finished fetch waiting to be applied.
#[derive(Debug)]
pub struct Completion {
    ticket: u64,
    kind: FetchKind,
    result: StorefrontResult<Fetched>,
}

impl Completion {
    /// Ticket returned when the fetch was started.
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Which fetch this answers.
    pub fn kind(&self) -> FetchKind {
        self.kind
    }

    /// Whether the fetch and decode both succeeded.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Owns the catalog and keeps memory and persistence consistent.
///
/// Fetches in flight are not coordinated: completions are applied in the
/// order they arrive and the last one applied wins.
///
/// Fetches are spawned onto the current tokio runtime, so the operations
/// that start one must run inside it.
pub struct CatalogSynchronizer<C, S> {
    client: Arc<C>,
    store: S,
    catalog: Catalog,
    state: SyncState,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    pending: usize,
    next_ticket: u64,
    random_ids: RangeInclusive<u32>,
}

impl<C, S> CatalogSynchronizer<C, S>
where
    C: CatalogClient + 'static,
    S: SnapshotStore,
{
    /// Create a synchronizer with an empty catalog.
    pub fn new(client: C, store: S) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            client: Arc::new(client),
            store,
            catalog: Catalog::default(),
            state: SyncState::Empty,
            completions_tx,
            completions_rx,
            pending: 0,
            next_ticket: 1,
            random_ids: 1..=20,
        }
    }

    /// Set the id range used by [`add_random`](Self::add_random).
    pub fn with_random_ids(mut self, ids: RangeInclusive<u32>) -> Self {
        self.random_ids = ids;
        self
    }

    /// Current catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current state.
    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Fetches started but not yet received.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Populate the catalog, preferring the persisted snapshot.
    ///
    /// A snapshot that is missing, unreadable or undecodable falls through to
    /// a full remote fetch.
    #[instrument(skip(self, listener), fields(state = %self.state))]
    pub async fn load(&mut self, listener: &mut dyn CatalogListener) -> LoadOutcome {
        match self.store.load(SNAPSHOT_KEY).await {
            Ok(Some(snapshot)) => match decode_products(&snapshot) {
                Ok(products) => {
                    let count = products.len();
                    self.catalog.replace(products);
                    self.state = SyncState::Loaded;
                    listener.products_changed(self.catalog.products());
                    info!(count, backend = self.store.backend_name(), "Catalog loaded from snapshot");
                    listener.notice(Notice::Loaded {
                        source: LoadSource::Store,
                        count,
                    });
                    return LoadOutcome::FromStore(count);
                }
                Err(e) => warn!(error = %e, "Stored snapshot is unreadable, fetching from remote"),
            },
            Ok(None) => debug!("No stored snapshot, fetching from remote"),
            Err(e) => warn!(error = %e, "Snapshot store read failed, fetching from remote"),
        }
        LoadOutcome::Fetching(self.refresh())
    }

    /// Start a full fetch. On success the catalog is replaced, never merged.
    pub fn refresh(&mut self) -> u64 {
        self.spawn_fetch(FetchKind::All)
    }

    /// Start fetching one product to append.
    pub fn add_one(&mut self, id: u32) -> u64 {
        self.spawn_fetch(FetchKind::One(id))
    }

    /// Start fetching a product with an id drawn from the configured range.
    pub fn add_random(&mut self) -> u64 {
        let id = if self.random_ids.is_empty() {
            *self.random_ids.start()
        } else {
            rand::thread_rng().gen_range(self.random_ids.clone())
        };
        debug!(id, "Picked random product id");
        self.add_one(id)
    }

    /// Append a locally made product with random price and rating, then persist.
    #[instrument(skip(self, listener), fields(len = self.catalog.len()))]
    pub async fn add_stub(&mut self, listener: &mut dyn CatalogListener) -> Product {
        let product = {
            let number = self.catalog.len() as u32 + 1;
            let mut rng = rand::thread_rng();
            Product {
                id: number,
                title: format!("New product {}", number),
                price: f64::from(rng.gen_range(10u32..=100)),
                description: "Description of the new product".to_string(),
                category: "Category".to_string(),
                image: STUB_IMAGE.to_string(),
                rating: Rating {
                    rate: f64::from(rng.gen_range(1u32..=5)),
                    count: rng.gen_range(10..=100),
                },
            }
        };

        self.append(product.clone(), listener).await;
        product
    }

    /// Remove the product at `index`.
    ///
    /// An index past the end is ignored: no change, no notice, no error.
    /// Callers holding an index from an earlier render can pass it as is.
    #[instrument(skip(self, listener), fields(len = self.catalog.len()))]
    pub async fn remove_at(
        &mut self,
        index: usize,
        listener: &mut dyn CatalogListener,
    ) -> Option<Product> {
        let Some(removed) = self.catalog.remove(index) else {
            debug!("Index out of range, ignoring removal");
            return None;
        };

        listener.products_changed(self.catalog.products());
        self.persist(listener).await;
        info!(title = %removed.title, "Product removed");
        listener.notice(Notice::Removed {
            title: removed.title.clone(),
        });
        Some(removed)
    }

    /// Wait for the next finished fetch.
    ///
    /// Returns `None` immediately when nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        if self.pending == 0 {
            return None;
        }
        let completion = self.completions_rx.recv().await?;
        self.pending -= 1;
        Some(completion)
    }

    /// Apply a finished fetch to the catalog.
    ///
    /// Failures leave catalog, state and snapshot untouched and produce one
    /// [`Notice::FetchFailed`]. Returns whether the catalog changed.
    #[instrument(skip(self, completion, listener), fields(ticket = completion.ticket, kind = %completion.kind))]
    pub async fn apply(
        &mut self,
        completion: Completion,
        listener: &mut dyn CatalogListener,
    ) -> bool {
        let Completion { kind, result, .. } = completion;

        match result {
            Err(e) => {
                error!(error = %e, "Fetch failed, catalog unchanged");
                listener.notice(Notice::FetchFailed {
                    kind,
                    message: e.to_string(),
                });
                false
            }
            Ok(Fetched::List(products)) => {
                let count = products.len();
                self.catalog.replace(products);
                self.state = SyncState::Loaded;
                listener.products_changed(self.catalog.products());
                self.persist(listener).await;
                info!(count, "Catalog replaced from remote");
                listener.notice(Notice::Loaded {
                    source: LoadSource::Remote,
                    count,
                });
                true
            }
            Ok(Fetched::Single(product)) => {
                self.append(product, listener).await;
                true
            }
        }
    }

    /// Apply completions until nothing is in flight.
    pub async fn settle(&mut self, listener: &mut dyn CatalogListener) {
        while let Some(completion) = self.next_completion().await {
            self.apply(completion, listener).await;
        }
    }

    /// Forget the persisted snapshot. The in-memory catalog is kept.
    pub async fn clear_snapshot(&self) -> StorefrontResult<()> {
        self.store.remove(SNAPSHOT_KEY).await
    }

    async fn append(&mut self, product: Product, listener: &mut dyn CatalogListener) {
        let title = product.title.clone();
        self.catalog.push(product);
        listener.products_changed(self.catalog.products());
        self.persist(listener).await;
        info!(title = %title, len = self.catalog.len(), "Product added");
        listener.notice(Notice::Added { title });
    }

    /// Write the snapshot. Best effort: a failure is logged and reported but
    /// the in-memory catalog stays as it is.
    async fn persist(&self, listener: &mut dyn CatalogListener) -> bool {
        let saved = match encode_products(self.catalog.products()) {
            Ok(snapshot) => self.store.save(SNAPSHOT_KEY, &snapshot).await,
            Err(e) => Err(e),
        };

        match saved {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    error = %e,
                    backend = self.store.backend_name(),
                    "Snapshot save failed, in-memory catalog kept"
                );
                listener.notice(Notice::PersistFailed {
                    message: e.to_string(),
                });
                false
            }
        }
    }

    fn spawn_fetch(&mut self, kind: FetchKind) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending += 1;

        let client = Arc::clone(&self.client);
        let reporter = CompletionReporter {
            ticket,
            kind,
            tx: Some(self.completions_tx.clone()),
        };
        debug!(ticket, kind = %kind, "Starting fetch");

        tokio::spawn(async move {
            let result = match kind {
                FetchKind::All => client
                    .fetch_all()
                    .await
                    .and_then(|body| decode_products(&body))
                    .map(Fetched::List),
                FetchKind::One(id) => client
                    .fetch_one(id)
                    .await
                    .and_then(|body| decode_product(&body))
                    .map(Fetched::Single),
            };
            reporter.finish(result);
        });

        ticket
    }
}

/// Delivers exactly one completion per fetch.
///
/// If the task unwinds or is cancelled before [`finish`](Self::finish), the
/// drop sends a failed completion instead so `pending` still reaches zero.
struct CompletionReporter {
    ticket: u64,
    kind: FetchKind,
    tx: Option<mpsc::UnboundedSender<Completion>>,
}

impl CompletionReporter {
    fn finish(mut self, result: StorefrontResult<Fetched>) {
        self.send(result);
    }

    fn send(&mut self, result: StorefrontResult<Fetched>) {
        let Some(tx) = self.tx.take() else {
            return;
        };
        let completion = Completion {
            ticket: self.ticket,
            kind: self.kind,
            result,
        };
        if tx.send(completion).is_err() {
            debug!(ticket = self.ticket, "Synchronizer gone, dropping completion");
        }
    }
}

impl Drop for CompletionReporter {
    fn drop(&mut self) {
        if self.tx.is_some() {
            warn!(ticket = self.ticket, kind = %self.kind, "Fetch task ended without a result");
            self.send(Err(HttpError::new("fetch task aborted").into()));
        }
    }
}
