use crate::fields::{FieldChain, FieldChains};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// When `true`, searches read the bundled dataset instead of the API.
    pub use_mock_data: bool,
    pub api_base_url: String,
    /// Path appended to `api_base_url`; the query is sent as `?q=`.
    pub api_path: String,
    /// Value of the `X-RapidAPI-Host` header.
    pub api_host: String,
    /// Value of the `X-RapidAPI-Key` header. Required unless mock mode is on.
    pub api_key: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Replacement for the default price fallback chain, if configured.
    pub price_fields: Option<FieldChain>,
}

impl AppConfig {
    /// Returns the field chains the mapper should use, with any configured
    /// price override applied.
    #[must_use]
    pub fn field_chains(&self) -> FieldChains {
        let mut chains = FieldChains::default();
        if let Some(price) = &self.price_fields {
            chains.price = price.clone();
        }
        chains
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("use_mock_data", &self.use_mock_data)
            .field("api_base_url", &self.api_base_url)
            .field("api_path", &self.api_path)
            .field("api_host", &self.api_host)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("price_fields", &self.price_fields)
            .finish()
    }
}
