//! HTTP gateway implementation using reqwest.
//!
//! This module implements the gateway trait against the internal service's
//! REST API. A single pooled `reqwest` client is shared by all calls.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `MESSAGES_INTERNAL_URL`: Base URL of the internal service (required)
//! - `GATEWAY_TIMEOUT_SEC`: Request timeout in seconds (default: 30)

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::error::{GatewayError, GatewayResult};
use super::MessageGateway;
use crate::dto::MessageDto;

/// Configuration for connecting to the internal service.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the internal service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_sec: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_sec: 30,
        }
    }
}

impl GatewayConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `MESSAGES_INTERNAL_URL`: Base URL of the internal service (required)
    /// - `GATEWAY_TIMEOUT_SEC`: Request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self, String> {
        let base_url = std::env::var("MESSAGES_INTERNAL_URL")
            .map_err(|_| "MESSAGES_INTERNAL_URL must be set".to_string())?;

        let timeout_sec = std::env::var("GATEWAY_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        Ok(Self {
            base_url,
            timeout_sec,
        })
    }

    /// Create a new configuration with a base URL.
    pub fn with_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Reqwest-backed gateway to the internal service.
#[derive(Clone, Debug)]
pub struct HttpMessageGateway {
    client: Client,
    base_url: String,
}

impl HttpMessageGateway {
    /// Create a new gateway.
    ///
    /// # Arguments
    /// * `config` - Upstream configuration
    ///
    /// # Returns
    /// * `Ok(HttpMessageGateway)` on success
    /// * `Err(GatewayError)` if the HTTP client cannot be built
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn messages_url(&self) -> String {
        format!("{}/api/messages", self.base_url)
    }

    fn message_url(&self, id: i64) -> String {
        format!("{}/api/messages/{}", self.base_url, id)
    }

    /// Turn a non-success response into a status error carrying the body.
    async fn check_status(response: Response) -> GatewayResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<empty response>".to_string());

        Err(GatewayError::Status {
            status: status.as_u16(),
            body: body.trim().to_string(),
        })
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
        Ok(Self::check_status(response).await?.json::<T>().await?)
    }
}

#[async_trait]
impl MessageGateway for HttpMessageGateway {
    async fn health_check(&self) -> GatewayResult<bool> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        Ok(response.status().is_success())
    }

    async fn create_message(&self, message: &MessageDto) -> GatewayResult<MessageDto> {
        let response = self
            .client
            .post(self.messages_url())
            .json(message)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn update_message(&self, id: i64, message: &MessageDto) -> GatewayResult<MessageDto> {
        let response = self
            .client
            .put(self.message_url(id))
            .json(message)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn get_message_by_id(&self, id: i64) -> GatewayResult<MessageDto> {
        let response = self.client.get(self.message_url(id)).send().await?;

        Self::parse(response).await
    }

    async fn get_all_messages(&self) -> GatewayResult<Vec<MessageDto>> {
        let response = self.client.get(self.messages_url()).send().await?;

        Self::parse(response).await
    }

    async fn delete_message(&self, id: i64) -> GatewayResult<()> {
        let response = self.client.delete(self.message_url(id)).send().await?;

        Self::check_status(response).await?;
        Ok(())
    }
}
