//! `partstore-app` — the storefront session and its view projection.
//!
//! Ties the catalog, filter engine, pricing, cart and order composer
//! together behind one session object with an explicit [`render`] call, so
//! the whole flow is testable without a presentation layer.

pub mod session;
pub mod view;

pub use session::{SessionConfig, StorefrontSession};
pub use view::{CartLineView, CartPanel, Listing, ProductCard, StorefrontView, render};
