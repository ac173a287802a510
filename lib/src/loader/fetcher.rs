// lib/src/loader/fetcher.rs

use async_trait::async_trait;
use log::debug;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;

use intake_models::{IntakeError, IntakeResult, ReferenceCollection};

use crate::config::{EndpointConfig, HttpConfig};

/// Source of raw reference JSON. One read-only GET per collection, no
/// parameters, no authentication.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReferenceFetcher: Send + Sync {
    async fn fetch(&self, collection: ReferenceCollection) -> IntakeResult<String>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    endpoints: EndpointConfig,
}

impl HttpFetcher {
    pub fn new(endpoints: EndpointConfig, http: &HttpConfig) -> IntakeResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = http.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(HttpFetcher { client, endpoints })
    }
}

#[async_trait]
impl ReferenceFetcher for HttpFetcher {
    async fn fetch(&self, collection: ReferenceCollection) -> IntakeResult<String> {
        let url = self.endpoints.url_for(collection);
        debug!("Fetching {} from {}", collection, url);

        let to_fetch_error = |e: reqwest::Error| IntakeError::Fetch {
            collection: collection.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(to_fetch_error)?
            .error_for_status()
            .map_err(to_fetch_error)?;

        response.text().await.map_err(to_fetch_error)
    }
}
