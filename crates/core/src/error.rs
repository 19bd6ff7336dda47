//! Storefront error model.

use thiserror::Error;

/// Result type used across the storefront crates.
pub type StoreResult<T> = Result<T, LoadError>;

/// Failure to load the product catalog.
///
/// This is the only failure path in the system. Every other operation is a
/// total function over in-memory state; malformed input such as an unknown
/// product id is handled as a silent no-op rather than a reported error.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog resource could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog resource was not a valid product list.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
