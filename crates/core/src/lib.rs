//! `partstore-core` — shared storefront building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no view concerns).

pub mod error;
pub mod id;

pub use error::{LoadError, StoreResult};
pub use id::ProductId;
