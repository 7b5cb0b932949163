use framegen_types::{ExampleCatalog, GenerateRequest, GeneratedFramework, TypeCatalog};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::transport::{HttpResponse, HttpTransport, Transport};

pub const FRAMEWORK_TYPES_PATH: &str = "/api/framework-types";
pub const EXAMPLES_PATH: &str = "/api/examples";
pub const GENERATE_PATH: &str = "/api/generate-framework";

/// Typed access to the generation API.
///
/// Every response goes through the same gate: a non-2xx status is an error,
/// and bodies are decoded (and normalized) into the strict domain types.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.base_url, config.timeout())?;
        Ok(Self::new(Arc::new(transport)))
    }

    pub async fn framework_types(&self) -> Result<TypeCatalog> {
        let response = self.transport.get(FRAMEWORK_TYPES_PATH).await?;
        decode(FRAMEWORK_TYPES_PATH, response)
    }

    pub async fn examples(&self) -> Result<ExampleCatalog> {
        let response = self.transport.get(EXAMPLES_PATH).await?;
        decode(EXAMPLES_PATH, response)
    }

    pub async fn generate(&self, request: &GenerateRequest) -> Result<GeneratedFramework> {
        debug!(
            framework_type = %request.framework_type,
            industry = %request.industry,
            "requesting framework generation"
        );
        let body = serde_json::to_value(request)?;
        let response = self.transport.post_json(GENERATE_PATH, &body).await?;
        decode(GENERATE_PATH, response)
    }
}

fn decode<T: DeserializeOwned>(path: &str, response: HttpResponse) -> Result<T> {
    debug!(path, status = response.status, bytes = response.body.len(), "response received");

    if !response.is_success() {
        return Err(Error::Status {
            path: path.to_string(),
            status: response.status,
        });
    }

    let value = serde_json::from_str(&response.body)?;
    Ok(value)
}
