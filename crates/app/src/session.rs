//! Storefront session: all state scoped to one page session.

use std::path::PathBuf;

use partstore_cart::Cart;
use partstore_catalog::{CatalogStore, Facets, FilterCriteria, Product};
use partstore_core::ProductId;
use partstore_order::OrderComposer;
use partstore_pricing::RateConfig;

/// Everything a session needs at startup: where the catalog lives and who
/// receives composed orders.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub catalog_path: PathBuf,
    /// Messaging handle the order deep link targets (the part after
    /// `t.me/`).
    pub recipient: String,
}

/// One storefront page session.
///
/// Holds what the original page kept in globals — the loaded catalog, the
/// current filter inputs, the rate inputs and the cart — behind explicit
/// methods. Each mutator is a discrete input-event handler; callers
/// re-render via [`crate::view::render`] after each one. There is exactly
/// one execution context: nothing here is shared or concurrent.
#[derive(Debug, Clone)]
pub struct StorefrontSession {
    /// `None` after a failed load: the listing shows the error state and
    /// the rest of the UI is inert.
    catalog: Option<CatalogStore>,
    criteria: FilterCriteria,
    rates: RateConfig,
    cart: Cart,
    composer: OrderComposer,
}

impl StorefrontSession {
    /// Load the catalog and start a session.
    ///
    /// A failed load is logged and leaves the session in the failed state;
    /// there is no retry.
    pub fn init(config: SessionConfig) -> Self {
        partstore_observability::init();

        let catalog = match CatalogStore::load_from_path(&config.catalog_path) {
            Ok(store) => Some(store),
            Err(err) => {
                tracing::error!(
                    error = %err,
                    path = %config.catalog_path.display(),
                    "catalog load failed",
                );
                None
            }
        };
        Self::with_catalog(catalog, config.recipient)
    }

    /// Start a session from an already-loaded catalog (headless use and
    /// tests).
    pub fn from_store(store: CatalogStore, recipient: impl Into<String>) -> Self {
        Self::with_catalog(Some(store), recipient.into())
    }

    fn with_catalog(catalog: Option<CatalogStore>, recipient: String) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            rates: RateConfig::default(),
            cart: Cart::new(),
            composer: OrderComposer::new(recipient),
        }
    }

    pub fn catalog_failed(&self) -> bool {
        self.catalog.is_none()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The currently visible subset of the catalog, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        match &self.catalog {
            Some(catalog) => self.criteria.apply(catalog.products()),
            None => Vec::new(),
        }
    }

    /// Dropdown options for the filter controls; empty when the catalog
    /// failed to load.
    pub fn facets(&self) -> Facets {
        self.catalog
            .as_ref()
            .map(CatalogStore::facets)
            .unwrap_or_default()
    }

    // Input-event handlers. Each one is a synchronous mutation of session
    // state; the caller re-renders afterwards.

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search = text.into();
    }

    pub fn set_brand(&mut self, brand: Option<String>) {
        self.criteria.brand = brand;
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.criteria.category = category;
    }

    pub fn set_city(&mut self, city: Option<String>) {
        self.criteria.city = city;
    }

    pub fn set_rate(&mut self, rate: f64) {
        self.rates.rate = rate;
    }

    pub fn set_markup(&mut self, markup_percent: f64) {
        self.rates.markup_percent = markup_percent;
    }

    /// Add one unit of a product to the cart. Ids that do not resolve to a
    /// catalog product are ignored.
    pub fn add_to_cart(&mut self, id: &ProductId) {
        let Some(catalog) = &self.catalog else {
            return;
        };
        match catalog.get(id) {
            Some(product) => self.cart.add(product),
            None => tracing::debug!(product_id = %id, "add ignored: unknown product"),
        }
    }

    /// Remove the whole line for a product; unknown ids are a no-op.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.cart.remove(id);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Deep link for the current cart, `None` while the cart is empty.
    pub fn checkout_link(&self) -> Option<String> {
        self.composer.compose(&self.cart, &self.rates)
    }
}
