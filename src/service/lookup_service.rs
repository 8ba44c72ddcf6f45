use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Default external lookup service.
pub const DEFAULT_ENDPOINT: &str = "https://ifconfig.co/json";

#[derive(Clone)]
pub struct LookupService {
    client: Client,
    endpoint: String,
}

impl LookupService {
    /// Builds a client for the given endpoint. No request timeout is applied
    /// unless one is passed in.
    pub fn new(endpoint: &str, timeout_ms: Option<u64>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    /// Fetches the lookup document. The HTTP status is logged but not
    /// checked; the body is parsed whatever the service returned.
    pub async fn fetch(&self) -> Result<Value> {
        debug!("GET {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        debug!("Response status: {}", response.status());
        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }
}
