//! Fetch Errors
//!
//! Every way a fetch can fail keeps its cause. Users only ever see
//! [`FETCH_FAILED`]; logs and the JSON API get the [`FetchError::kind`].

use serde::Deserialize;
use thiserror::Error;

/// Message shown to users for any fetch failure
pub const FETCH_FAILED: &str = "Failed to fetch data";

/// Longest provider error body carried into `HttpStatus`
const MAX_MESSAGE_LEN: usize = 200;

/// Errors that can occur when fetching a day record
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid endpoint {endpoint}: {error}")]
    InvalidEndpoint { endpoint: String, error: String },

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Request timeout")]
    Timeout,

    #[error("Provider returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Generic message safe to show to users
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED
    }

    /// Stable tag for logs and API error codes
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidEndpoint { .. } => "invalid_endpoint",
            FetchError::Network(_) => "network",
            FetchError::Timeout => "timeout",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::Parse(_) => "parse",
        }
    }

    /// HTTP status returned by the provider, if it got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(error)
        }
    }

    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        FetchError::HttpStatus {
            status,
            message: provider_message(body),
        }
    }
}

/// Error bodies the provider is known to send
#[derive(Deserialize)]
#[serde(untagged)]
enum ProviderErrorBody {
    /// API gateway errors: `{"error": {"code": "...", "message": "..."}}`
    Gateway { error: GatewayError },
    /// APOD service errors: `{"code": 400, "msg": "..."}`
    Service { msg: String },
}

#[derive(Deserialize)]
struct GatewayError {
    message: String,
}

/// Pull a readable message out of a provider error body
fn provider_message(body: &str) -> String {
    match serde_json::from_str::<ProviderErrorBody>(body) {
        Ok(ProviderErrorBody::Gateway { error }) => error.message,
        Ok(ProviderErrorBody::Service { msg }) => msg,
        Err(_) => body.trim().chars().take(MAX_MESSAGE_LEN).collect(),
    }
}
