//! Outbound HTTP capability.
//!
//! The client depends on a single abstract GET; `HttpTransport` is the
//! production implementation over reqwest and tests substitute a recording
//! mock. Cancellation and timeouts live here, not in the core.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::LinketrackError;

/// Raw HTTP exchange result handed to the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// The single outbound capability the client calls through.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one GET against `url` and return whatever status and body
    /// came back. A failure to obtain any status at all is reported as
    /// `LinketrackError::Internal`.
    async fn get(&self, url: &str) -> Result<RawResponse, LinketrackError>;
}

/// Production transport backed by a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with a per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, LinketrackError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LinketrackError::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, LinketrackError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LinketrackError::Internal(format!("request failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LinketrackError::Internal(format!("failed to read body: {e}")))?;

        Ok(RawResponse { status, body })
    }
}
