//! App Root Component
//!
//! Owns the page state: loading, error, or a loaded record.

use leptos::*;

use crate::api;
use crate::components::{DayRecordView, ErrorMessage, Loading};
use crate::state::DayRecord;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let (record, set_record) = create_signal(None::<DayRecord>);
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(true);

    // The component body runs once, so this is the page's only fetch
    spawn_local(async move {
        match api::fetch_day_record().await {
            Ok(day) => set_record.set(Some(day)),
            Err(e) => {
                logging::warn!("APOD fetch failed: {}", e);
                set_error.set(Some(api::FETCH_FAILED.to_string()));
            }
        }
        set_loading.set(false);
    });

    move || {
        if loading.get() {
            return view! { <Loading /> }.into_view();
        }
        if let Some(message) = error.get() {
            return view! { <ErrorMessage message=message /> }.into_view();
        }
        match record.get() {
            Some(record) => view! { <DayRecordView record=record /> }.into_view(),
            None => view! {}.into_view(),
        }
    }
}
