//! HTTP API Client
//!
//! Fetches the day's record from the APOD viewer server.

use gloo_net::http::Request;
use std::fmt;

use crate::state::DayRecord;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8083/api/v1";

/// Local storage key for overriding the API base
const API_BASE_KEY: &str = "apod_api_url";

/// Message shown to users for any fetch failure
pub const FETCH_FAILED: &str = "Failed to fetch data";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base(&url)
}

/// Remove trailing slashes
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Why a fetch failed. Logged to the console, never shown.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Network(String),
    HttpStatus(u16),
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(e) => write!(f, "Network error: {}", e),
            FetchError::HttpStatus(status) => write!(f, "Server returned HTTP {}", status),
            FetchError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

/// Fetch today's record
pub async fn fetch_day_record() -> Result<DayRecord, FetchError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/apod", api_base))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::HttpStatus(response.status()));
    }

    response
        .json::<DayRecord>()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}
