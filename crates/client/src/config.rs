use crate::{ClientError, Result};
use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "https://rentapro.emonadi.com/api/v1";
pub const DEFAULT_API_KEY: &str = "your_frontend_key";
pub const DEFAULT_ASSET_BASE_URL: &str = "https://rentapro.emonadi.com";

pub const API_KEY_HEADER: &str = "X-API-Key";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub asset_base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
        }
    }

    pub fn with_asset_base_url(mut self, asset_base_url: impl Into<String>) -> Self {
        self.asset_base_url = asset_base_url.into();
        self
    }

    /// Reads `API_BASE_URL`, `API_KEY` and `ASSET_BASE_URL`, falling back to the
    /// public defaults. Loading `.env` is left to the caller.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let config = Self {
            base_url: var("API_BASE_URL", DEFAULT_BASE_URL),
            api_key: var("API_KEY", DEFAULT_API_KEY),
            asset_base_url: var("ASSET_BASE_URL", DEFAULT_ASSET_BASE_URL),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url).map_err(|e| {
            ClientError::Config(format!("API base URL '{}' is invalid: {}", self.base_url, e))
        })?;
        Url::parse(&self.asset_base_url).map_err(|e| {
            ClientError::Config(format!(
                "Asset base URL '{}' is invalid: {}",
                self.asset_base_url, e
            ))
        })?;
        if self.api_key.trim().is_empty() {
            return Err(ClientError::Config("API key must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn api_key_header(&self) -> (String, String) {
        (API_KEY_HEADER.to_string(), self.api_key.clone())
    }

    /// Headers attached to every read request.
    pub fn default_headers(&self) -> Vec<(String, String)> {
        vec![
            (CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string()),
            self.api_key_header(),
        ]
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_API_KEY)
    }
}
