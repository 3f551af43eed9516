//! Mapping from source-specific raw offer records to [`CanonicalOffer`].
//!
//! Every canonical field is resolved independently through its
//! [`FieldChain`]. Missing fields never fail the mapping: `id` falls back to
//! the record's position, `title` and `retailer` to fixed placeholders, and
//! `sku`/`price` to `None`.

use serde_json::Value;

use crate::fields::{FieldChain, FieldChains};
use crate::offers::CanonicalOffer;

pub const UNKNOWN_PRODUCT: &str = "Unknown product";
pub const UNKNOWN_RETAILER: &str = "Unknown retailer";

/// Maps raw offer records to canonical offers using the default field chains.
///
/// The output has one element per input record, in the same order.
#[must_use]
pub fn map_offers_to_view_model(raw_offers: &[Value]) -> Vec<CanonicalOffer> {
    map_offers_with_chains(raw_offers, &FieldChains::default())
}

/// Maps raw offer records to canonical offers using caller-supplied chains.
#[must_use]
pub fn map_offers_with_chains(raw_offers: &[Value], chains: &FieldChains) -> Vec<CanonicalOffer> {
    raw_offers
        .iter()
        .enumerate()
        .map(|(index, record)| map_offer(index, record, chains))
        .collect()
}

fn map_offer(index: usize, record: &Value, chains: &FieldChains) -> CanonicalOffer {
    let id = chains
        .id
        .first_present(record)
        .map_or_else(|| index.to_string(), value_to_string);

    // Blank names would render as empty cards, so they count as absent.
    let title = first_non_blank(&chains.title, record).unwrap_or_else(|| UNKNOWN_PRODUCT.into());
    let retailer =
        first_non_blank(&chains.retailer, record).unwrap_or_else(|| UNKNOWN_RETAILER.into());

    let sku = chains.sku.first_present(record).map(value_to_string);
    let price = chains.price.first_present(record).cloned();

    CanonicalOffer {
        id,
        title,
        retailer,
        sku,
        price,
        raw: record.clone(),
    }
}

fn first_non_blank(chain: &FieldChain, record: &Value) -> Option<String> {
    chain
        .paths()
        .iter()
        .filter_map(|path| path.lookup(record))
        .map(value_to_string)
        .find(|text| !text.trim().is_empty())
}

/// Renders a JSON value as display text: strings verbatim, everything else
/// as compact JSON (`42`, `true`, `{"a":1}`).
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
