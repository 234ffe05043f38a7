//! Money calculation helpers using rust_decimal for precision
//!
//! Prices travel as `f64`; arithmetic happens on `Decimal` and is converted
//! back rounded to 2 decimal places.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Discount is a percentage
pub const MAX_DISCOUNT: f64 = 100.0;

/// Convert f64 to Decimal for calculation
///
/// NaN/Infinity become zero and are logged.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Clamp a discount percentage into `0..=100`; NaN becomes 0
pub fn clamp_discount(discount: f64) -> f64 {
    if discount.is_nan() {
        return 0.0;
    }
    discount.clamp(0.0, MAX_DISCOUNT)
}

/// Price after applying a percentage discount
pub fn discounted_price(selling_price: f64, discount: f64) -> f64 {
    let price = to_decimal(selling_price);
    let pct = to_decimal(clamp_discount(discount));
    let off = (price * pct / Decimal::ONE_HUNDRED).round_dp(DECIMAL_PLACES);
    to_f64(price - off)
}

/// Whether a selling price is usable (finite and strictly positive)
pub fn is_positive_price(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
