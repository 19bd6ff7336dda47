//! Display formatting for prices.
//!
//! Rounding policy: display values round half-up to the nearest whole unit.
//! Multi-line totals are summed from the unrounded line values and rounded
//! once, so a grand total can differ from the sum of the rounded per-line
//! figures.

use crate::rate::RateConfig;

/// Currency code of the catalog's listed prices.
pub const BASE_CURRENCY: &str = "BYN";

/// Display symbol of the converted (target) currency.
pub const TARGET_CURRENCY: &str = "₽";

/// Separator between amount and currency, and between digit groups,
/// matching the source locale's convention.
const NBSP: char = '\u{a0}';

/// Format a base-currency amount for display under the current rates.
///
/// With no rate configured the base value is shown unrounded and tagged
/// with [`BASE_CURRENCY`]; otherwise the converted value is rounded and
/// tagged with [`TARGET_CURRENCY`].
pub fn format_price(base_amount: f64, rates: &RateConfig) -> String {
    if !rates.is_configured() {
        return format_base(base_amount);
    }
    format_converted(rates.convert(base_amount))
}

/// Base-currency display: the listed value, unrounded.
pub fn format_base(base_amount: f64) -> String {
    format!("{}{}{}", format_number(base_amount), NBSP, BASE_CURRENCY)
}

/// Grand total over unrounded base-currency line values (sum, then round
/// once at display).
pub fn format_total(line_values: impl IntoIterator<Item = f64>, rates: &RateConfig) -> String {
    format_price(line_values.into_iter().sum(), rates)
}

fn format_converted(converted: f64) -> String {
    format!(
        "{}{}{}",
        group_thousands(round_half_up(converted)),
        NBSP,
        TARGET_CURRENCY
    )
}

/// Round half-up to the nearest whole unit. Prices are never negative.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Thousands grouping with NBSP separators.
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(NBSP);
        }
        grouped.push(ch);
    }
    grouped
}

/// Print a whole-valued f64 without a trailing `.0`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
