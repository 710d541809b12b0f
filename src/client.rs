//! Tracking client for the Link & Track API.
//!
//! Owns the credentials (validated once at construction, immutable after)
//! and orchestrates lookups through the abstract transport. Batch tracking
//! is strictly sequential so results always come back in request order.

use std::sync::Arc;
use std::time::Duration;

use crate::error::{self, LinketrackError};
use crate::transport::{HttpTransport, Transport};
use crate::types::{LinketrackResponse, Tracked};
use crate::validate;

const API_URL: &str = "https://api.linketrack.com/track/json";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for `LinketrackClient`.
#[derive(Debug, Clone)]
pub struct LinketrackConfig {
    /// Per-request timeout handed down to the HTTP transport.
    pub timeout: Duration,
    /// Provider endpoint override (local test servers, staging).
    pub base_url: Option<String>,
}

impl Default for LinketrackConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            base_url: None,
        }
    }
}

/// API credentials, validated at client construction and never mutated.
#[derive(Debug, Clone)]
struct Credentials {
    user: String,
    token: String,
}

/// Client for the Link & Track tracking API.
///
/// Construction fails with `LinketrackError::Authorization` when the
/// credentials do not have the expected shape. Instances hold no mutable
/// state, so one client can be shared freely across tasks.
#[derive(Clone)]
pub struct LinketrackClient {
    credentials: Credentials,
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for LinketrackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinketrackClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl LinketrackClient {
    pub fn new(user: &str, token: &str) -> Result<Self, LinketrackError> {
        Self::with_config(user, token, LinketrackConfig::default())
    }

    pub fn with_config(
        user: &str,
        token: &str,
        config: LinketrackConfig,
    ) -> Result<Self, LinketrackError> {
        let transport = Arc::new(HttpTransport::new(config.timeout)?);
        Self::with_transport(user, token, config, transport)
    }

    /// Build a client over a caller-supplied transport.
    pub fn with_transport(
        user: &str,
        token: &str,
        config: LinketrackConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, LinketrackError> {
        validate::validate_credentials(user, token)?;
        Ok(Self {
            credentials: Credentials {
                user: user.to_string(),
                token: token.to_string(),
            },
            base_url: config.base_url.unwrap_or_else(|| API_URL.to_string()),
            transport,
        })
    }

    /// Track a single code.
    ///
    /// A locally invalid code fails fast with `InvalidCode` and never
    /// reaches the network. A valid code performs exactly one GET.
    pub async fn track(&self, code: &str) -> Result<Tracked, LinketrackError> {
        if !validate::is_valid_code(code) {
            return Err(LinketrackError::InvalidCode(code.to_string()));
        }

        let url = self.url(code);
        tracing::debug!(code, "requesting tracking data");

        let response = self.transport.get(&url).await?;
        if !(200..300).contains(&response.status) {
            tracing::warn!(code, status = response.status, "provider returned an error");
            return Err(error::classify_response(response.status, &response.body));
        }

        let wire: LinketrackResponse =
            serde_json::from_str(&response.body).map_err(|e| LinketrackError::Unexpected {
                detail: format!("malformed provider response: {e}"),
            })?;

        Ok(Tracked::from(wire))
    }

    /// Track several codes sequentially, preserving input order.
    ///
    /// An explicit loop, not a join: ordering is part of the contract and
    /// the first failure aborts the whole batch.
    pub async fn track_all<I, S>(&self, codes: I) -> Result<Vec<Tracked>, LinketrackError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut results = Vec::new();
        for code in codes {
            results.push(self.track(code.as_ref()).await?);
        }
        Ok(results)
    }

    fn url(&self, code: &str) -> String {
        format!(
            "{}?user={}&token={}&codigo={}",
            self.base_url,
            urlencoding::encode(&self.credentials.user),
            urlencoding::encode(&self.credentials.token),
            urlencoding::encode(code),
        )
    }
}
