use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

use crate::core::config::Config;
use crate::core::error::TransportError;
use crate::core::review::ReviewApi;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Practicum homework status endpoint.
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        }
    }
}

#[async_trait]
impl ReviewApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, TransportError> {
        debug!("Requesting homework statuses from {} (from_date={})", self.endpoint, from_date);

        let res = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                error!("Homework status request failed: {}", e);
                TransportError::Request(e.without_url().to_string())
            })?;

        let status = res.status();
        if !status.is_success() {
            error!("Homework status API returned {}", status);
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        res.json::<Value>().await.map_err(|e| {
            error!("Homework status API returned an undecodable body: {}", e);
            TransportError::Decode(e.without_url().to_string())
        })
    }
}
