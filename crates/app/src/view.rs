//! Pure state → view projection.
//!
//! The presentation layer (markup, styling, DOM events) is an external
//! collaborator: it consumes this tree and nothing else. Rendering never
//! mutates the session, so it can run after every input event and is
//! idempotent.

use partstore_cart::CartLine;
use partstore_catalog::{Facets, Product};
use partstore_core::ProductId;
use partstore_pricing::{RateConfig, format_price, format_total};

use crate::session::StorefrontSession;

/// Full view tree for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontView {
    pub listing: Listing,
    /// Dropdown options; empty when the catalog failed to load.
    pub filters: Facets,
    pub cart: CartPanel,
}

/// Product-list area states.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// The catalog failed to load; filters and cart are inert.
    LoadFailed,
    /// Nothing matched the criteria (or the catalog is empty): the
    /// "not found" state.
    Empty,
    Products(Vec<ProductCard>),
}

/// One product card in the listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Display price under the current rate configuration.
    pub price: String,
    pub image: Option<String>,
}

/// The cart side panel.
#[derive(Debug, Clone, PartialEq)]
pub struct CartPanel {
    pub lines: Vec<CartLineView>,
    pub total: String,
    /// Pre-filled deep link; `None` disables the submit control.
    pub checkout: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineView {
    pub title: String,
    pub quantity: u32,
    pub price: String,
}

/// Project the session state into a view tree.
pub fn render(session: &StorefrontSession) -> StorefrontView {
    let rates = session.rates();

    let listing = if session.catalog_failed() {
        Listing::LoadFailed
    } else {
        let visible = session.visible_products();
        if visible.is_empty() {
            Listing::Empty
        } else {
            Listing::Products(visible.into_iter().map(|p| card(p, rates)).collect())
        }
    };

    let cart = session.cart();
    let cart_panel = CartPanel {
        lines: cart
            .lines()
            .iter()
            .map(|line| CartLineView {
                title: line.title.clone(),
                quantity: line.quantity,
                price: format_price(line.line_base(), rates),
            })
            .collect(),
        total: format_total(cart.lines().iter().map(CartLine::line_base), rates),
        checkout: session.checkout_link(),
    };

    StorefrontView {
        listing,
        filters: session.facets(),
        cart: cart_panel,
    }
}

fn card(product: &Product, rates: &RateConfig) -> ProductCard {
    ProductCard {
        id: product.id.clone(),
        title: product.title.clone(),
        description: product.description.clone(),
        price: format_price(product.base_price, rates),
        image: product.image.clone(),
    }
}
