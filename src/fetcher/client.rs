//! APOD REST API Client
//!
//! HTTP client for the provider's `planetary/apod` endpoint.

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

use super::error::FetchError;
use super::types::DayRecord;
use super::DayRecordSource;
use crate::config::ApodConfig;

/// Query parameter carrying the access key
const API_KEY_PARAM: &str = "api_key";

/// APOD REST API client
pub struct ApodClient {
    client: Client,
    config: ApodConfig,
}

impl ApodClient {
    /// Create a new client with the given configuration
    ///
    /// A `request_timeout_secs` of 0 leaves the request without a timeout.
    pub fn new(config: ApodConfig) -> Result<Self, FetchError> {
        let mut builder =
            Client::builder().user_agent(concat!("apod/", env!("CARGO_PKG_VERSION")));
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }
        let client = builder.build().map_err(FetchError::Network)?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ApodConfig {
        &self.config
    }

    /// Full request URL, access key included
    pub fn request_url(&self) -> Result<Url, FetchError> {
        Url::parse_with_params(
            &self.config.endpoint,
            &[(API_KEY_PARAM, self.config.api_key.as_str())],
        )
        .map_err(|e| FetchError::InvalidEndpoint {
            endpoint: self.config.endpoint.clone(),
            error: e.to_string(),
        })
    }

    /// Fetch today's record
    ///
    /// One outbound request, no retry.
    pub async fn fetch_day_record(&self) -> Result<DayRecord, FetchError> {
        let url = self.request_url()?;
        tracing::debug!(url = %redacted(&url), "Fetching APOD record");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::from_status(status.as_u16(), &body));
        }

        let body = response.bytes().await.map_err(FetchError::from_transport)?;
        let record: DayRecord = serde_json::from_slice(&body)?;
        if record.parsed_date().is_none() {
            tracing::warn!(date = %record.date, "Provider date is not YYYY-MM-DD, showing it as sent");
        }

        tracing::debug!(
            date = %record.date,
            media_type = %record.media_type,
            "Fetched APOD record"
        );
        Ok(record)
    }
}

#[async_trait]
impl DayRecordSource for ApodClient {
    fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    async fn fetch_day_record(&self) -> Result<DayRecord, FetchError> {
        ApodClient::fetch_day_record(self).await
    }
}

/// Copy of `url` with the access key masked, for logging
pub fn redacted(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == API_KEY_PARAM {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut masked = url.clone();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked
}
