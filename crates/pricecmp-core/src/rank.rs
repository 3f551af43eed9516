//! Price ordering over canonical offers.

use std::cmp::Ordering;

use serde_json::Value;

use crate::offers::CanonicalOffer;

/// Numeric sort key for an offer's price.
///
/// JSON numbers are used as-is; strings are trimmed and parsed as `f64`.
/// Absent, unparseable, non-numeric, or NaN prices key as `f64::INFINITY`
/// so they sort after every priced offer.
#[must_use]
pub fn price_sort_key(price: Option<&Value>) -> f64 {
    numeric_price(price).unwrap_or(f64::INFINITY)
}

/// Coerces a raw price to a number, if it holds one.
pub(crate) fn numeric_price(price: Option<&Value>) -> Option<f64> {
    let number = match price? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if number.is_nan() {
        None
    } else {
        Some(number)
    }
}

/// Returns a new list of `offers` sorted by ascending price.
///
/// The sort is stable: offers with equal keys, including two unpriced
/// offers, keep their input order. The input is left untouched.
#[must_use]
pub fn sort_offers_by_price(offers: &[CanonicalOffer]) -> Vec<CanonicalOffer> {
    let mut keyed: Vec<(f64, &CanonicalOffer)> = offers
        .iter()
        .map(|offer| (price_sort_key(offer.price.as_ref()), offer))
        .collect();
    // Keys are never NaN, so `partial_cmp` always yields an ordering.
    keyed.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    keyed.into_iter().map(|(_, offer)| offer.clone()).collect()
}

/// Id of the cheapest offer in an already price-sorted list.
#[must_use]
pub fn cheapest_offer_id(sorted: &[CanonicalOffer]) -> Option<&str> {
    sorted.first().map(|offer| offer.id.as_str())
}

#[cfg(test)]
#[path = "rank_test.rs"]
mod tests;
