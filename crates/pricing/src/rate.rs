//! Exchange-rate configuration.

use serde::{Deserialize, Serialize};

/// User-supplied exchange rate and markup, mutable for the session.
///
/// A non-positive rate means "no rate configured": prices stay in the base
/// currency. The default is unconfigured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    pub rate: f64,
    pub markup_percent: f64,
}

impl RateConfig {
    pub fn new(rate: f64, markup_percent: f64) -> Self {
        Self {
            rate,
            markup_percent,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.rate > 0.0
    }

    /// Convert a base-currency amount, unrounded.
    ///
    /// Callers round only at display time so that summed totals do not
    /// accumulate per-line rounding error.
    pub fn convert(&self, base_amount: f64) -> f64 {
        base_amount * self.rate * (1.0 + self.markup_percent / 100.0)
    }
}
