//! In-memory catalog store.

use std::collections::BTreeSet;
use std::path::Path;

use partstore_core::{ProductId, StoreResult};

use crate::product::Product;

/// The session's product list, loaded once from a static resource.
///
/// There is no retry and no caching beyond this single in-memory copy;
/// products are immutable for the lifetime of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Read and parse the catalog resource.
    pub fn load_from_path(path: impl AsRef<Path>) -> StoreResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_json_slice(&bytes)
    }

    /// Parse a catalog from raw JSON (an array of product records).
    pub fn from_json_slice(bytes: &[u8]) -> StoreResult<Self> {
        let products: Vec<Product> = serde_json::from_slice(bytes)?;
        tracing::info!(count = products.len(), "catalog loaded");
        Ok(Self::new(products))
    }

    /// All products, in original catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct filter values present in the catalog, sorted, for populating
    /// the brand/category/city dropdowns.
    pub fn facets(&self) -> Facets {
        Facets {
            brands: distinct(self.products.iter().map(|p| p.brand.as_deref())),
            categories: distinct(self.products.iter().map(|p| p.category.as_deref())),
            cities: distinct(self.products.iter().map(|p| p.city.as_deref())),
        }
    }
}

/// Dropdown options derived from the loaded catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub brands: Vec<String>,
    pub categories: Vec<String>,
    pub cities: Vec<String>,
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .flatten()
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
