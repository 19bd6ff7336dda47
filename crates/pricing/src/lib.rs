//! Pricing domain module: exchange-rate configuration and price display.
//!
//! Deterministic value logic only; no IO and no view concerns.

pub mod format;
pub mod rate;

pub use format::{BASE_CURRENCY, TARGET_CURRENCY, format_base, format_price, format_total};
pub use rate::RateConfig;
