//! Presentation adapter between the catalog and the product table.

use storefront_core::Product;

/// Receives the index of a row the user activated.
///
/// The index refers to the list as it was rendered; the receiver must check
/// it against the current catalog before acting on it.
pub trait RowActivation: Send {
    /// Row `index` was activated.
    fn activated(&mut self, index: usize);
}

impl<F> RowActivation for F
where
    F: FnMut(usize) + Send,
{
    fn activated(&mut self, index: usize) {
        self(index)
    }
}

/// Display projection of one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    /// Product id
    pub id: u32,
    /// Product title
    pub title: String,
    /// Price as `$x.yy`
    pub price: String,
    /// Five-star rating bar
    pub stars: String,
    /// Product category
    pub category: String,
}

impl ProductRow {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: format!("${:.2}", product.price),
            stars: stars(product.rating.rate),
            category: product.category.clone(),
        }
    }
}

/// Render a 0..=5 rate as filled and empty stars, rounded to the nearest star.
pub fn stars(rate: f64) -> String {
    let filled = if rate.is_finite() {
        rate.round().clamp(0.0, 5.0) as usize
    } else {
        0
    };
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

/// Holds the last product list handed over by the catalog owner and turns it
/// into table rows.
///
/// The adapter never mutates the catalog. Every update replaces the whole
/// backing list and bumps [`generation`](Self::generation), so views redraw
/// all rows.
pub struct ProductListAdapter {
    products: Vec<Product>,
    generation: u64,
    selected: usize,
    on_activate: Option<Box<dyn RowActivation>>,
}

impl ProductListAdapter {
    /// Create an adapter over `products`, optionally reporting row activations.
    pub fn new<A>(products: Vec<Product>, on_activate: Option<A>) -> Self
    where
        A: RowActivation + 'static,
    {
        Self {
            products,
            generation: 0,
            selected: 0,
            on_activate: on_activate.map(|a| Box::new(a) as Box<dyn RowActivation>),
        }
    }

    /// Create an adapter that ignores row activations.
    pub fn passive(products: Vec<Product>) -> Self {
        Self::new(products, None::<fn(usize)>)
    }

    /// Replace the backing list. All rows are considered changed.
    pub fn update_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.generation += 1;
        if self.selected >= self.products.len() {
            self.selected = self.products.len().saturating_sub(1);
        }
        tracing::trace!(
            generation = self.generation,
            len = self.products.len(),
            "Adapter list replaced"
        );
    }

    /// Number of list replacements so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Products as last received.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Display rows in catalog order.
    pub fn rows(&self) -> Vec<ProductRow> {
        self.products.iter().map(ProductRow::from_product).collect()
    }

    /// Report an activation of row `index`.
    ///
    /// Returns `false` when the index is past the end or nobody listens.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.products.len() {
            return false;
        }
        match self.on_activate.as_mut() {
            Some(on_activate) => {
                on_activate.activated(index);
                true
            }
            None => false,
        }
    }

    /// Index of the highlighted row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the highlight down one row.
    pub fn select_next(&mut self) {
        if self.selected < self.products.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Move the highlight up one row.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }
}

impl std::fmt::Debug for ProductListAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductListAdapter")
            .field("len", &self.products.len())
            .field("generation", &self.generation)
            .field("selected", &self.selected)
            .field("on_activate", &self.on_activate.is_some())
            .finish()
    }
}
