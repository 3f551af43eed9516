use serde_json::Value;

/// Keys that may hold the offer list in a search response, highest priority
/// first.
pub const OFFER_LIST_KEYS: [&str; 3] = ["items", "results", "offers"];

/// Locates the list of raw offer records inside a search response.
///
/// Returns the first value under [`OFFER_LIST_KEYS`] that is a JSON array. A
/// response that is not an object, or has no array under any of those keys,
/// yields an empty list.
#[must_use]
pub fn extract_offers(response: &Value) -> Vec<Value> {
    let Some(object) = response.as_object() else {
        return Vec::new();
    };

    OFFER_LIST_KEYS
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_array))
        .cloned()
        .unwrap_or_default()
}
