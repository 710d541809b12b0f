//! Typed error taxonomy for the Link & Track API.
//!
//! Every failure surfaces to the caller as one of the closed set of
//! `LinketrackError` variants. Classification of a failed HTTP exchange is a
//! pure function of the status code; the library never retries on its own.

use thiserror::Error;

/// Where to send reports for failures outside the known taxonomy.
pub const ISSUES_URL: &str = "https://github.com/linketrack-rs/linketrack-rs/issues";

/// All errors the library can produce.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinketrackError {
    /// Local credential rejection, or the provider answered HTTP 403.
    #[error("authorization failed: {0}")]
    Authorization(String),

    /// The provider answered HTTP 429.
    #[error("rate limit exceeded: {0}")]
    User(String),

    /// HTTP 500, or a transport failure before any status was obtained.
    #[error("provider internal failure: {0}")]
    Internal(String),

    /// Any other non-2xx status, carried as structured data.
    #[error("request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    /// Tracking code rejected locally; never reaches the network.
    #[error("invalid tracking code: {0}")]
    InvalidCode(String),

    /// Anything outside the taxonomy, malformed provider JSON included.
    #[error("unexpected error: {detail} (please report this at {ISSUES_URL})")]
    Unexpected { detail: String },
}

impl LinketrackError {
    /// The HTTP status carried by a `Request` error, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Map a non-2xx HTTP exchange to its typed error.
///
/// Status 0 stands for "no status obtained" and is classified the same way
/// as a provider-side 500: transient, worth retrying by the caller.
pub fn classify_response(status: u16, body: &str) -> LinketrackError {
    match status {
        403 => LinketrackError::Authorization("provider rejected the credentials".to_string()),
        429 => LinketrackError::User("too many requests are being made".to_string()),
        0 | 500 => LinketrackError::Internal(
            "the provider failed to answer, try again later".to_string(),
        ),
        _ => LinketrackError::Request {
            status,
            message: body.trim().to_string(),
        },
    }
}
