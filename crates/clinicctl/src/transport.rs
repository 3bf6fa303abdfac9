//! HTTP transport between the router and clinic endpoints.

use async_trait::async_trait;
use clinic_common::{McpRequest, McpResponse};
use std::time::Duration;

/// Bounded wait for a single remote call. Expiry surfaces as a transport
/// failure with no side effect attributed to the router itself.
pub const CALL_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("clinic returned HTTP {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Body(String),
}

/// Seam between the router and the network. Tests substitute a mock to
/// count calls and inject failures.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str, request: &McpRequest) -> Result<McpResponse, TransportError>;
}

/// reqwest-backed transport with a bounded per-call timeout.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(CALL_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, request: &McpRequest) -> Result<McpResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status().as_u16()));
        }

        // Read the body first: a connection reset or timeout mid-stream is
        // still a network failure, not a malformed reply. Only bytes that
        // arrived intact but do not form an envelope count as `Body`.
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| TransportError::Body(e.to_string()))
    }
}
