//! Cart domain module: the session's ordered selection of products.

pub mod cart;

pub use cart::{Cart, CartLine};
