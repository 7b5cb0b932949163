use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::error::{Error, Result};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The seam between the API client and the network.
///
/// Paths are absolute API paths such as `/api/examples`; the transport owns
/// the base URL. Implementations return `Ok` for any response that arrived,
/// whatever its status. Status interpretation belongs to `ApiClient`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<HttpResponse>;
    async fn post_json(&self, path: &str, body: &Value) -> Result<HttpResponse>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read(path: &str, response: reqwest::Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(path, e))?;
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| Error::transport(path, e))?;
        Self::read(path, response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<HttpResponse> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::transport(path, e))?;
        Self::read(path, response).await
    }
}
