//! APOD Fetcher
//!
//! Builds the request URL from injected configuration and performs a single
//! GET against the provider:
//! - [`ApodClient`]: reqwest-backed client for the live API
//! - [`DayRecordSource`]: the seam the view fetches through
//! - [`FetchError`]: failure causes, kept apart for logging

mod client;
mod error;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{redacted, ApodClient};
pub use error::{FetchError, FETCH_FAILED};
pub use types::{DayRecord, MediaType, DATE_FORMAT};

use async_trait::async_trait;

/// Anything that can produce today's record
#[async_trait]
pub trait DayRecordSource: Send + Sync {
    /// Where records come from, for health output and logs
    fn endpoint(&self) -> &str;

    /// Fetch the record. One call, one outbound request.
    async fn fetch_day_record(&self) -> Result<DayRecord, FetchError>;
}
