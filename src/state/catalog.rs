//! Public catalog state: loaded products, search query, and detail overlay.
//!
//! DESIGN
//! ======
//! Products are fetched once per page load into an id-indexed store. Search
//! re-filters that snapshot and never re-fetches. Cards carry only a product
//! id; the detail overlay looks the snapshot up here at click time.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashMap;

use crate::error::ApiError;
use crate::net::types::Product;

/// Products in load order plus an id index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductStore {
    items: Vec<Product>,
    index: HashMap<i64, usize>,
}

impl ProductStore {
    pub fn new(items: Vec<Product>) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, product) in items.iter().enumerate() {
            index.entry(product.id).or_insert(pos);
        }
        Self { items, index }
    }

    pub fn all(&self) -> &[Product] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&Product> {
        self.index.get(&id).and_then(|pos| self.items.get(*pos))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Case-insensitive substring match on name, code, and category. A blank
    /// query returns every product.
    pub fn filter(&self, query: &str) -> Vec<Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|p| matches_query(p, &needle))
            .cloned()
            .collect()
    }
}

/// `needle` must already be lower-cased.
pub fn matches_query(product: &Product, needle: &str) -> bool {
    [&product.name, &product.code, &product.category]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Failed,
    Loaded,
}

/// What the product grid should show right now.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogView {
    Loading,
    Failed,
    /// The backend returned no products at all.
    Empty,
    /// Products exist but none match the query.
    NoMatches,
    Grid(Vec<Product>),
}

/// The open detail dialog, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenDetail {
    pub instance: u64,
    pub product: Product,
    /// Marked closed; removed once the close transition ends.
    pub closing: bool,
}

/// Singleton detail overlay with a two-phase close.
#[derive(Clone, Debug, Default)]
pub struct DetailOverlay {
    current: Option<OpenDetail>,
    next_instance: u64,
}

impl DetailOverlay {
    /// Open `product`, replacing whatever overlay is present.
    pub fn open(&mut self, product: Product) -> u64 {
        self.next_instance += 1;
        let instance = self.next_instance;
        self.current = Some(OpenDetail { instance, product, closing: false });
        instance
    }

    /// Mark the overlay closed and return its instance for `finish_close`.
    pub fn begin_close(&mut self) -> Option<u64> {
        let open = self.current.as_mut()?;
        open.closing = true;
        Some(open.instance)
    }

    /// Remove the overlay if it is still the instance that began closing.
    pub fn finish_close(&mut self, instance: u64) {
        if self.current.as_ref().is_some_and(|open| open.instance == instance && open.closing) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&OpenDetail> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.as_ref().is_some_and(|open| !open.closing)
    }
}

/// All state owned by the catalog page for one page load.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub load: LoadState,
    pub store: ProductStore,
    pub query: String,
    pub detail: DetailOverlay,
}

impl CatalogState {
    pub fn finish_load(&mut self, result: Result<Vec<Product>, ApiError>) {
        match result {
            Ok(products) => {
                log::debug!("catalog loaded {} products", products.len());
                self.store = ProductStore::new(products);
                self.load = LoadState::Loaded;
            }
            Err(e) => {
                log::warn!("catalog load failed: {e}");
                self.load = LoadState::Failed;
            }
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn view(&self) -> CatalogView {
        match self.load {
            LoadState::Loading => CatalogView::Loading,
            LoadState::Failed => CatalogView::Failed,
            LoadState::Loaded if self.store.is_empty() => CatalogView::Empty,
            LoadState::Loaded => {
                let visible = self.store.filter(&self.query);
                if visible.is_empty() { CatalogView::NoMatches } else { CatalogView::Grid(visible) }
            }
        }
    }

    /// Open the detail overlay for `id`. An unknown id opens an empty product.
    pub fn open_detail(&mut self, id: i64) -> u64 {
        let product = self.store.get(id).cloned().unwrap_or_default();
        self.detail.open(product)
    }
}
