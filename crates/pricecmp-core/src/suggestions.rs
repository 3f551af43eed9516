/// Product names offered as type-ahead suggestions.
pub const PRODUCT_SUGGESTIONS: [&str; 10] = [
    "Whole milk 1 gallon",
    "Large eggs, dozen",
    "White sandwich bread",
    "Long grain rice 2 lb",
    "Gala apples 3 lb bag",
    "Bananas",
    "Chicken breast",
    "Ground beef 80/20",
    "Cheddar cheese block",
    "Fresh broccoli",
];

/// Returns the suggestions containing `query`, case-insensitively.
///
/// A blank query matches every suggestion.
#[must_use]
pub fn filter_suggestions(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    PRODUCT_SUGGESTIONS
        .iter()
        .copied()
        .filter(|item| needle.is_empty() || item.to_lowercase().contains(&needle))
        .collect()
}
