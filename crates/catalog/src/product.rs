//! Catalog product record.

use partstore_core::ProductId;
use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Loaded once per session from the static catalog resource and never
/// mutated afterwards; identity is the `id` field. Field names follow the
/// catalog data file, where the listed price is tagged with its currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub oem: Option<String>,
    /// Listed price in the base currency, before any conversion.
    #[serde(rename = "price_byn")]
    pub base_price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Minimal product with all optional fields empty.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, base_price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            brand: None,
            category: None,
            city: None,
            model: None,
            oem: None,
            base_price,
            image: None,
        }
    }
}
