//! Ordered field-accessor chains used by the view-model mapper.
//!
//! Each canonical offer field is resolved by walking a [`FieldChain`] left to
//! right and taking the first [`FieldPath`] that resolves to a present,
//! non-null value. Chains are plain data so their priority order can be read,
//! tested, and overridden from configuration without touching the mapper.

use serde_json::Value;

/// A path of object keys into a raw offer record, e.g. `price.value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Builds a path from its key segments.
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parses a dotted path such as `"price.value"`.
    ///
    /// Returns `None` if the input is blank or contains an empty segment.
    #[must_use]
    pub fn from_dotted(dotted: &str) -> Option<Self> {
        let trimmed = dotted.trim();
        if trimmed.is_empty() {
            return None;
        }
        let segments: Vec<String> = trimmed.split('.').map(|s| s.trim().to_owned()).collect();
        if segments.iter().any(String::is_empty) {
            return None;
        }
        Some(Self(segments))
    }

    /// Resolves the path against `record`.
    ///
    /// Any step that hits a non-object, a missing key, or an explicit `null`
    /// resolves to `None`.
    #[must_use]
    pub fn lookup<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        let mut current = record;
        for key in &self.0 {
            current = current.as_object()?.get(key)?;
        }
        if current.is_null() {
            None
        } else {
            Some(current)
        }
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// Candidate paths for one canonical field, highest priority first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldChain(Vec<FieldPath>);

impl FieldChain {
    #[must_use]
    pub fn new(paths: Vec<FieldPath>) -> Self {
        Self(paths)
    }

    /// Builds a chain of single-key paths.
    #[must_use]
    pub fn of_keys(keys: &[&str]) -> Self {
        Self(keys.iter().map(|k| FieldPath::new([*k])).collect())
    }

    /// Parses a comma-separated list of dotted paths, e.g.
    /// `"price.value,price,sale_price"`.
    ///
    /// # Errors
    ///
    /// Returns the offending entry if any entry is not a valid dotted path.
    pub fn parse_list(list: &str) -> Result<Self, String> {
        let paths = list
            .split(',')
            .map(|entry| FieldPath::from_dotted(entry).ok_or_else(|| entry.to_owned()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(paths))
    }

    #[must_use]
    pub fn paths(&self) -> &[FieldPath] {
        &self.0
    }

    /// Returns the first candidate value present on `record`.
    #[must_use]
    pub fn first_present<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        self.0.iter().find_map(|path| path.lookup(record))
    }
}

/// One [`FieldChain`] per canonical offer field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChains {
    pub id: FieldChain,
    pub title: FieldChain,
    pub retailer: FieldChain,
    pub sku: FieldChain,
    pub price: FieldChain,
}

impl Default for FieldChains {
    fn default() -> Self {
        Self {
            id: FieldChain::of_keys(&["id", "sku", "asin"]),
            title: FieldChain::of_keys(&["title", "name"]),
            retailer: FieldChain::of_keys(&["retailer", "store", "merchant", "seller"]),
            sku: FieldChain::of_keys(&["sku", "upc", "asin"]),
            price: FieldChain::new(vec![
                FieldPath::new(["price", "value"]),
                FieldPath::new(["price"]),
                FieldPath::new(["salePrice"]),
                FieldPath::new(["unit_price"]),
                FieldPath::new(["current_price"]),
            ]),
        }
    }
}
