//! Display formatting for canonical offer prices.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

use crate::rank::numeric_price;

pub const NO_PRICE_LABEL: &str = "No price";

/// Formats a raw canonical price as a two-decimal dollar amount, e.g.
/// `"$3.49"`, or [`NO_PRICE_LABEL`] when the price is absent or not a finite
/// number.
///
/// Decimal text is converted without passing through `f64`, so `"2.675"`
/// rounds half away from zero to `"$2.68"`.
#[must_use]
pub fn format_display_price(price: Option<&Value>) -> String {
    let Some(amount) = price.and_then(to_decimal) else {
        return NO_PRICE_LABEL.to_owned();
    };

    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", rounded.abs())
    } else {
        format!("${}", rounded.abs())
    }
}

fn to_decimal(price: &Value) -> Option<Decimal> {
    let number = numeric_price(Some(price)).filter(|n| n.is_finite())?;
    let text = match price {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_owned(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .or_else(|| Decimal::from_f64(number))
}
