//! Explicit search-screen state.
//!
//! The screen moves `Idle -> Loading -> Success | Error`. Each transition
//! consumes the current [`SearchState`] and returns the next one, so the
//! caller owns the state and the extract/map/rank pipeline stays pure.

use serde_json::Value;

use crate::extract::extract_offers;
use crate::fields::FieldChains;
use crate::normalize::map_offers_with_chains;
use crate::offers::CanonicalOffer;
use crate::rank::{cheapest_offer_id, sort_offers_by_price};
use crate::suggestions::filter_suggestions;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    /// The last search failed; holds the message shown to the user.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    /// Offers from the last successful search, in source order.
    pub results: Vec<CanonicalOffer>,
    pub status: SearchStatus,
    pub show_suggestions: bool,
}

impl SearchState {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Stores edited query text and opens the suggestion list.
    #[must_use]
    pub fn set_query(self, text: impl Into<String>) -> Self {
        Self {
            query: text.into(),
            show_suggestions: true,
            ..self
        }
    }

    /// Clears the query and opens the full suggestion list.
    #[must_use]
    pub fn clear_query(self) -> Self {
        self.set_query(String::new())
    }

    /// Starts a search for `override_query`, or for the current query when
    /// no override is given.
    ///
    /// Returns `None` and leaves the state untouched if the trimmed query is
    /// empty. Otherwise returns the loading state and the trimmed query to
    /// fetch. A chosen suggestion (the override) also becomes the query text.
    #[must_use]
    pub fn begin_search(self, override_query: Option<&str>) -> (Self, Option<String>) {
        let trimmed = override_query
            .unwrap_or(&self.query)
            .trim()
            .to_owned();
        if trimmed.is_empty() {
            return (self, None);
        }

        let query = override_query.map_or(self.query, str::to_owned);
        let next = Self {
            query,
            status: SearchStatus::Loading,
            ..self
        };
        (next, Some(trimmed))
    }

    /// Finishes a search with the fetched response or a failure message.
    ///
    /// A response runs through extraction and mapping with `chains`; a
    /// failure clears the results.
    #[must_use]
    pub fn complete_search(self, outcome: Result<Value, String>, chains: &FieldChains) -> Self {
        match outcome {
            Ok(response) => {
                let raw = extract_offers(&response);
                Self {
                    results: map_offers_with_chains(&raw, chains),
                    status: SearchStatus::Success,
                    show_suggestions: false,
                    ..self
                }
            }
            Err(message) => Self {
                results: Vec::new(),
                status: SearchStatus::Error(message),
                ..self
            },
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SearchStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Results ordered cheapest first.
    #[must_use]
    pub fn sorted_results(&self) -> Vec<CanonicalOffer> {
        sort_offers_by_price(&self.results)
    }

    /// Id of the cheapest current result, if any.
    #[must_use]
    pub fn cheapest_offer_id(&self) -> Option<String> {
        cheapest_offer_id(&self.sorted_results()).map(str::to_owned)
    }

    /// Suggestions to show for the current query; empty while the list is
    /// closed.
    #[must_use]
    pub fn visible_suggestions(&self) -> Vec<&'static str> {
        if self.show_suggestions {
            filter_suggestions(&self.query)
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
