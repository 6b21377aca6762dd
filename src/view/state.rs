//! Page View State
//!
//! A page instance starts out loading, fetches exactly once, and settles
//! into either a loaded record or an error. Settled states are terminal;
//! a fresh [`PageView`] is the only way back to loading.

use tokio::sync::OnceCell;

use crate::fetcher::{DayRecord, DayRecordSource, FetchError};

/// What a page instance currently shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewState<'a> {
    /// Fetch not settled yet
    Loading,
    /// Fetch failed; carries the user-facing message
    Errored(&'a str),
    /// Fetch succeeded
    Loaded(&'a DayRecord),
}

impl ViewState<'_> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// One page instance with a single-assignment result slot
#[derive(Debug, Default)]
pub struct PageView {
    outcome: OnceCell<Result<DayRecord, FetchError>>,
}

impl PageView {
    /// Create a page instance in the loading state
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the page's one fetch and return the settled state.
    ///
    /// The source is called at most once per instance: repeated or
    /// concurrent calls wait for the first fetch and share its outcome.
    pub async fn initialize<S>(&self, source: &S) -> ViewState<'_>
    where
        S: DayRecordSource + ?Sized,
    {
        self.outcome
            .get_or_init(|| async {
                let outcome = source.fetch_day_record().await;
                match &outcome {
                    Ok(record) => tracing::info!(
                        date = %record.date,
                        media_type = %record.media_type,
                        "Page loaded"
                    ),
                    Err(e) => tracing::warn!(
                        kind = e.kind(),
                        endpoint = source.endpoint(),
                        error = %e,
                        "Page fetch failed"
                    ),
                }
                outcome
            })
            .await;

        self.state()
    }

    /// Current state. Pure read, never triggers a fetch.
    pub fn state(&self) -> ViewState<'_> {
        match self.outcome.get() {
            None => ViewState::Loading,
            Some(Ok(record)) => ViewState::Loaded(record),
            Some(Err(e)) => ViewState::Errored(e.user_message()),
        }
    }

    /// Underlying cause of a failed fetch. Never shown to users.
    pub fn failure(&self) -> Option<&FetchError> {
        match self.outcome.get() {
            Some(Err(e)) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::testing::{moon, FixedSource};
    use crate::fetcher::FETCH_FAILED;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Notify;

    /// Source that blocks until released
    struct GatedSource {
        gate: Notify,
    }

    #[async_trait]
    impl DayRecordSource for GatedSource {
        fn endpoint(&self) -> &str {
            "gated://apod"
        }

        async fn fetch_day_record(&self) -> Result<DayRecord, FetchError> {
            self.gate.notified().await;
            Ok(moon())
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let view = PageView::new();
        assert_eq!(view.state(), ViewState::Loading);
        assert!(view.failure().is_none());
    }

    #[tokio::test]
    async fn test_success_loads_record() {
        let source = FixedSource::ok(moon());
        let view = PageView::new();

        let state = view.initialize(&source).await;
        assert_eq!(state, ViewState::Loaded(&moon()));
        assert!(view.failure().is_none());
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_shows_generic_message() {
        let source = FixedSource::failing();
        let view = PageView::new();

        assert_eq!(view.initialize(&source).await, ViewState::Errored(FETCH_FAILED));
        assert_eq!(view.failure().and_then(FetchError::status), Some(503));
    }

    #[tokio::test]
    async fn test_fetches_once_when_initialized_twice() {
        let source = FixedSource::ok(moon());
        let view = PageView::new();

        view.initialize(&source).await;
        view.initialize(&source).await;
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_fetches_once_under_concurrent_initialize() {
        let source = FixedSource::ok(moon());
        let view = PageView::new();

        let (a, b) = tokio::join!(view.initialize(&source), view.initialize(&source));
        assert_eq!(a, b);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_loading_until_fetch_resolves() {
        let source = Arc::new(GatedSource { gate: Notify::new() });
        let view = Arc::new(PageView::new());

        let task = {
            let source = Arc::clone(&source);
            let view = Arc::clone(&view);
            tokio::spawn(async move {
                view.initialize(source.as_ref()).await;
            })
        };

        tokio::task::yield_now().await;
        assert!(view.state().is_loading());

        source.gate.notify_one();
        task.await.unwrap();

        assert_eq!(view.state(), ViewState::Loaded(&moon()));
        // Settled states are terminal
        assert!(!view.state().is_loading());
    }

    #[tokio::test]
    async fn test_dropped_initialize_leaves_view_loading() {
        let source = GatedSource { gate: Notify::new() };
        let view = PageView::new();

        let pending = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            view.initialize(&source),
        )
        .await;
        assert!(pending.is_err());
        assert!(view.state().is_loading());
    }
}
