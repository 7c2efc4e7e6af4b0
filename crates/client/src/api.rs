use crate::config::ApiConfig;
use crate::response::handle_response;
use crate::transport::{ApiRequest, RequestBody, ReqwestTransport, Transport};
use crate::{ClientError, Result};
use domain::dto::ApiEnvelope;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;

/// Marketplace API client. Every call carries the API key header and is
/// normalized through [`handle_response`].
pub struct ApiClient<T: Transport = ReqwestTransport> {
    config: ApiConfig,
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    pub fn from_config(config: ApiConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config, ReqwestTransport::new()?))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn get<D: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiEnvelope<D>> {
        let request = ApiRequest {
            method: Method::GET,
            url: self.url_for(path, query)?,
            headers: self.config.default_headers(),
            body: RequestBody::Empty,
        };
        self.dispatch(request).await
    }

    /// Headers are taken as given; callers decide on `Content-Type`.
    pub async fn post<D: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
        headers: Vec<(String, String)>,
    ) -> Result<ApiEnvelope<D>> {
        let request = ApiRequest {
            method: Method::POST,
            url: self.url_for(path, &[])?,
            headers,
            body,
        };
        self.dispatch(request).await
    }

    fn url_for(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let endpoint = self.config.endpoint(path);
        let mut url = Url::parse(&endpoint)
            .map_err(|e| ClientError::Config(format!("Invalid endpoint '{}': {}", endpoint, e)))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url.into())
    }

    async fn dispatch<D: DeserializeOwned>(&self, request: ApiRequest) -> Result<ApiEnvelope<D>> {
        tracing::debug!("{} {}", request.method, request.url);

        let response = self.transport.execute(request).await?;
        tracing::debug!("API response status: {}", response.status);

        handle_response(&response)
    }
}
