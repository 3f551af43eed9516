//! Selection between the bundled dataset and the live search API.

use pricecmp_core::{AppConfig, ConfigError};
use serde_json::Value;

use crate::client::OfferClient;
use crate::error::ClientError;
use crate::mock::mock_response;

/// Where search responses come from.
pub enum OfferSource {
    /// The bundled dataset; every query returns the same response.
    Mock,
    Remote(OfferClient),
}

impl OfferSource {
    /// Selects the source named by `config.use_mock_data`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the remote source is selected
    /// without an API key, or any error from [`OfferClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        if config.use_mock_data {
            return Ok(Self::Mock);
        }
        if config.api_key.is_none() {
            return Err(ConfigError::MissingEnvVar("PRICECMP_API_KEY".to_string()).into());
        }
        Ok(Self::Remote(OfferClient::new(config)?))
    }

    /// Short label for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Remote(_) => "remote",
        }
    }

    /// Fetches the raw search response for `query`.
    ///
    /// # Errors
    ///
    /// Propagates [`OfferClient::search`] errors for the remote source. The
    /// mock source never fails.
    pub async fn fetch(&self, query: &str) -> Result<Value, ClientError> {
        match self {
            Self::Mock => Ok(mock_response()),
            Self::Remote(client) => client.search(query).await,
        }
    }
}
