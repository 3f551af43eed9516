pub mod app_config;
pub mod config;
pub mod display;
pub mod error;
pub mod extract;
pub mod fields;
pub mod normalize;
pub mod offers;
pub mod rank;
pub mod search;
pub mod suggestions;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use display::{format_display_price, NO_PRICE_LABEL};
pub use error::ConfigError;
pub use extract::{extract_offers, OFFER_LIST_KEYS};
pub use fields::{FieldChain, FieldChains, FieldPath};
pub use normalize::{
    map_offers_to_view_model, map_offers_with_chains, UNKNOWN_PRODUCT, UNKNOWN_RETAILER,
};
pub use offers::CanonicalOffer;
pub use rank::{cheapest_offer_id, price_sort_key, sort_offers_by_price};
pub use search::{SearchState, SearchStatus};
pub use suggestions::{filter_suggestions, PRODUCT_SUGGESTIONS};
