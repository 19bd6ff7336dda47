//! Order composition: serializes the cart into a messaging deep link.

pub mod composer;

pub use composer::{DEFAULT_HEADER, OrderComposer};
