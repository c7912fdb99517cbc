//! HTTP client for the search backend API

use reqwest::Client;
use serde_json::Value;

use super::types::SearchRequest;
use super::{SearchBackend, SearchFuture};
use crate::config::Config;
use crate::error::SearchError;

/// Client for a backend exposing `POST /search` and `GET /health`.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: Client,
    base_url: String,
    search_path: String,
    health_path: String,
}

impl HttpSearchClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest` client (proxies, timeouts, TLS).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            search_path: "/search".to_string(),
            health_path: "/health".to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            search_path: config.search_path.clone(),
            health_path: config.health_path.clone(),
            ..Self::new(&config.backend_url)
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, self.search_path)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, self.health_path)
    }

    /// Check if backend is healthy
    pub async fn health(&self) -> Result<Value, SearchError> {
        let response = self.client.get(self.health_url()).send().await?;
        read_json(response).await
    }

    /// Send a query and return whatever JSON the backend answers with.
    pub async fn query(&self, query: String) -> Result<Value, SearchError> {
        let url = self.search_url();
        tracing::debug!(%url, "sending search request");
        let response = self
            .client
            .post(&url)
            .json(&SearchRequest { query })
            .send()
            .await?;
        read_json(response).await
    }
}

impl SearchBackend for HttpSearchClient {
    fn search(&self, query: String) -> SearchFuture {
        let client = self.clone();
        Box::pin(async move { client.query(query).await })
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value, SearchError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SearchError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| SearchError::Decode(e.to_string()))
}
