//! Catalog domain module: the in-memory product list and its filter engine.
//!
//! This crate contains deterministic domain logic plus the single IO point
//! of the whole system (the one-time catalog load).

pub mod filter;
pub mod product;
pub mod store;

pub use filter::FilterCriteria;
pub use product::Product;
pub use store::{CatalogStore, Facets};
