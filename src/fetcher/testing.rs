//! Test fixtures shared across modules.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{DayRecord, DayRecordSource, FetchError, MediaType};

/// The "Moon" image record
pub(crate) fn moon() -> DayRecord {
    DayRecord {
        date: "2024-01-01".to_string(),
        title: "Moon".to_string(),
        explanation: "...".to_string(),
        media_type: MediaType::Image,
        url: "https://x/img.jpg".to_string(),
        hdurl: None,
        service_version: "v1".to_string(),
    }
}

/// Source returning a fixed outcome and counting calls
pub(crate) struct FixedSource {
    record: Option<DayRecord>,
    calls: AtomicUsize,
}

impl FixedSource {
    pub(crate) fn ok(record: DayRecord) -> Self {
        Self {
            record: Some(record),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails every fetch with a 503
    pub(crate) fn failing() -> Self {
        Self {
            record: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DayRecordSource for FixedSource {
    fn endpoint(&self) -> &str {
        "fixed://apod"
    }

    async fn fetch_day_record(&self) -> Result<DayRecord, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        match &self.record {
            Some(record) => Ok(record.clone()),
            None => Err(FetchError::HttpStatus {
                status: 503,
                message: "Service Unavailable".to_string(),
            }),
        }
    }
}
