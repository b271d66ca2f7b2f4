//! Shared fixtures for synchronizer tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use storefront_client::CatalogClient;
use storefront_core::{Product, Rating, encode_products};
use storefront_error::{HttpError, StorefrontResult};
use storefront_store::MemoryStore;
use storefront_sync::{CatalogListener, Notice};
use tokio::sync::oneshot;

type Gate = oneshot::Receiver<StorefrontResult<String>>;

/// Catalog client whose list responses are released by the test.
#[derive(Default)]
pub struct ScriptedClient {
    all: Mutex<VecDeque<Gate>>,
    single: Mutex<HashMap<u32, String>>,
    all_calls: AtomicUsize,
    one_calls: AtomicUsize,
}

impl ScriptedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a list response released later through the returned sender.
    pub fn expect_all(&self) -> oneshot::Sender<StorefrontResult<String>> {
        let (tx, rx) = oneshot::channel();
        self.all.lock().unwrap().push_back(rx);
        tx
    }

    /// Queue a list response that is ready immediately.
    pub fn respond_all(&self, result: StorefrontResult<String>) {
        let tx = self.expect_all();
        tx.send(result).unwrap();
    }

    pub fn respond_one(&self, id: u32, body: impl Into<String>) {
        self.single.lock().unwrap().insert(id, body.into());
    }

    pub fn all_calls(&self) -> usize {
        self.all_calls.load(Ordering::SeqCst)
    }

    pub fn one_calls(&self) -> usize {
        self.one_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CatalogClient for ScriptedClient {
    async fn fetch_all(&self) -> StorefrontResult<String> {
        self.all_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.all.lock().unwrap().pop_front();
        match gate {
            Some(gate) => gate
                .await
                .unwrap_or_else(|_| Err(HttpError::new("gate dropped").into())),
            None => Err(HttpError::new("no scripted response").into()),
        }
    }

    async fn fetch_one(&self, id: u32) -> StorefrontResult<String> {
        self.one_calls.fetch_add(1, Ordering::SeqCst);
        self.single
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| HttpError::with_status(404, format!("product {}", id)).into())
    }
}

/// One thing a listener saw, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Seen {
    /// Products changed; carries the store's save count at that moment
    Changed { len: usize, saves_before: usize },
    Notice(Notice),
}

/// Listener that records everything and peeks at the store.
pub struct Recorder {
    store: Arc<MemoryStore>,
    pub seen: Vec<Seen>,
    pub last_products: Vec<Product>,
}

impl Recorder {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            store,
            seen: Vec::new(),
            last_products: Vec::new(),
        }
    }

    pub fn notices(&self) -> Vec<&Notice> {
        self.seen
            .iter()
            .filter_map(|seen| match seen {
                Seen::Notice(notice) => Some(notice),
                Seen::Changed { .. } => None,
            })
            .collect()
    }

    pub fn failures(&self) -> usize {
        self.notices().iter().filter(|n| n.is_failure()).count()
    }

    pub fn changes(&self) -> usize {
        self.seen
            .iter()
            .filter(|seen| matches!(seen, Seen::Changed { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

impl CatalogListener for Recorder {
    fn products_changed(&mut self, products: &[Product]) {
        self.last_products = products.to_vec();
        self.seen.push(Seen::Changed {
            len: products.len(),
            saves_before: self.store.save_count(),
        });
    }

    fn notice(&mut self, notice: Notice) {
        self.seen.push(Seen::Notice(notice));
    }
}

pub fn product(id: u32, rate: f64) -> Product {
    Product::builder()
        .id(id)
        .title(format!("Product {}", id))
        .price(id as f64 + 0.99)
        .category("misc")
        .rating(Rating { rate, count: 10 })
        .build()
        .unwrap()
}

pub fn products(ids: &[u32]) -> Vec<Product> {
    ids.iter().map(|id| product(*id, 3.0)).collect()
}

pub fn body(products: &[Product]) -> String {
    encode_products(products).unwrap()
}

pub fn single_body(product: &Product) -> String {
    serde_json::to_string(product).unwrap()
}
