//! Drives one search submission through the search state machine.

use pricecmp_core::{FieldChains, SearchState, SearchStatus};

use crate::source::OfferSource;

/// Runs one search submission against `source`.
///
/// Blank queries return `state` unchanged without fetching. Otherwise the
/// state passes through loading and ends in success (offers mapped with
/// `chains`) or in an error carrying the transport failure's message.
pub async fn submit_search(
    state: SearchState,
    override_query: Option<&str>,
    source: &OfferSource,
    chains: &FieldChains,
) -> SearchState {
    let (state, query) = state.begin_search(override_query);
    let Some(query) = query else {
        tracing::debug!("ignoring search submission with blank query");
        return state;
    };

    tracing::info!(query = %query, source = source.label(), "searching offers");
    let outcome = source.fetch(&query).await.map_err(|e| {
        tracing::warn!(query = %query, error = %e, "offer search failed");
        e.to_string()
    });

    let next = state.complete_search(outcome, chains);
    if next.status == SearchStatus::Success {
        tracing::info!(query = %query, offers = next.results.len(), "offer search completed");
    }
    next
}
