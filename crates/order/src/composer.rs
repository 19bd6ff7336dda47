//! Deep-link order composer.
//!
//! Builds a `https://t.me/<handle>?text=...` URL whose text parameter
//! pre-fills the recipient's chat with an itemized order summary. No
//! response is awaited; delivery is entirely external. Opening the URL in
//! a new browsing context is the view layer's job.

use partstore_cart::{Cart, CartLine};
use partstore_pricing::{RateConfig, format_price, format_total};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

/// First line of the composed message body.
pub const DEFAULT_HEADER: &str = "Заявка с сайта";

/// Label of the trailing total line.
const TOTAL_LABEL: &str = "Итого";

/// Fixed messaging recipient plus the message header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderComposer {
    recipient: String,
    header: String,
}

impl OrderComposer {
    /// Composer targeting a recipient handle (the part after `t.me/`).
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            header: DEFAULT_HEADER.to_string(),
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Plain-text order body: header, one line per cart line as
    /// `"{title} × {quantity} — {line price}"`, then the total.
    ///
    /// Returns `None` for an empty cart; there is nothing to submit.
    pub fn compose_message(&self, cart: &Cart, rates: &RateConfig) -> Option<String> {
        if cart.is_empty() {
            return None;
        }

        let mut body = self.header.clone();
        for line in cart.lines() {
            body.push('\n');
            body.push_str(&format!(
                "{} × {} — {}",
                line.title,
                line.quantity,
                format_price(line.line_base(), rates)
            ));
        }
        body.push_str(&format!(
            "\n\n{}: {}",
            TOTAL_LABEL,
            format_total(cart.lines().iter().map(CartLine::line_base), rates)
        ));
        Some(body)
    }

    /// Deep link with the percent-encoded order body, or `None` for an
    /// empty cart.
    pub fn compose(&self, cart: &Cart, rates: &RateConfig) -> Option<String> {
        let message = self.compose_message(cart, rates)?;
        let encoded = utf8_percent_encode(&message, NON_ALPHANUMERIC);
        Some(format!("https://t.me/{}?text={}", self.recipient, encoded))
    }
}
