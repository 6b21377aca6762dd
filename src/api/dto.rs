//! Data Transfer Objects
//!
//! Response types for the API endpoints. The record itself is served as
//! [`crate::fetcher::DayRecord`].

use serde::Serialize;

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,
    /// Provider endpoint records are fetched from
    pub endpoint: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
