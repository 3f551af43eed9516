//! HTTP client for the product-search API.
//!
//! Issues one `GET {base}{path}?q=<query>` per search with the RapidAPI
//! key/host headers and hands back the decoded JSON body untouched. Shape
//! interpretation is left to the `pricecmp-core` pipeline; this module only
//! turns transport failures into typed [`ClientError`]s.

use std::time::Duration;

use pricecmp_core::AppConfig;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::ClientError;

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Client for the product-search endpoint.
///
/// Use [`OfferClient::new`] with loaded configuration, or
/// [`OfferClient::with_base_url`] to point at a mock server in tests.
pub struct OfferClient {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
    api_host: String,
}

impl OfferClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidUrl`] if the configured
    /// base URL and path do not form a valid URL.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_base_url,
            &config.api_path,
            &config.api_host,
            config.api_key.as_deref(),
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client for an explicit base URL and search path.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidUrl`] if `base_url`
    /// and `path` do not form a valid URL.
    pub fn with_base_url(
        base_url: &str,
        path: &str,
        api_host: &str,
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: Self::endpoint_url(base_url, path)?,
            api_key: api_key.map(str::to_owned),
            api_host: api_host.to_owned(),
        })
    }

    /// Searches offers for `query` and returns the decoded response body.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network or TLS failure.
    /// - [`ClientError::UnexpectedStatus`] for any non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not valid JSON.
    pub async fn search(&self, query: &str) -> Result<Value, ClientError> {
        let url = self.search_url(query);

        let mut request = self
            .client
            .get(url.clone())
            .header(API_HOST_HEADER, &self.api_host);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Value>(&body).map_err(|e| ClientError::Deserialize {
            context: format!("search response for \"{query}\""),
            source: e,
        })
    }

    /// Builds the search URL with `query` URL-encoded as the `q` parameter.
    fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }

    /// Joins `base_url` and `path` with exactly one slash between them.
    fn endpoint_url(base_url: &str, path: &str) -> Result<Url, ClientError> {
        let joined = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| ClientError::InvalidUrl {
            url: joined,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
