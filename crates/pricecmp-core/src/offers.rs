use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One retailer's offer, normalized from a source-specific raw record.
///
/// Built fresh for every search and never mutated afterwards. `sku` and
/// `price` are the only fields that may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalOffer {
    /// Identifier within the current result set. Falls back to the record's
    /// list position when the record carries no identifying field.
    pub id: String,
    pub title: String,
    pub retailer: String,
    /// SKU, UPC, or marketplace identifier, if the record has one.
    pub sku: Option<String>,
    /// Price exactly as the source sent it: a JSON number, a numeric string,
    /// or anything else found under a price field. Numeric coercion happens
    /// only when ranking and displaying.
    pub price: Option<Value>,
    /// The untouched source record.
    pub raw: Value,
}
