//! Record View
//!
//! Title, media, explanation and date of a loaded record.

use leptos::*;

use crate::state::{DayRecord, MediaType};

/// Loaded record
#[component]
pub fn DayRecordView(record: DayRecord) -> impl IntoView {
    let DayRecord {
        date,
        title,
        explanation,
        media_type,
        url,
        ..
    } = record;
    let heading = title.clone();

    view! {
        <div class="container mx-auto p-4">
            <h1 class="text-2xl font-bold mb-4">{heading}</h1>
            <Media media_type=media_type url=url title=title />
            <p class="text-gray-700">{explanation}</p>
            <p class="text-gray-500 text-sm mt-2">"Date: " {date}</p>
        </div>
    }
}

/// Image or embedded video; nothing for other media types
#[component]
fn Media(media_type: MediaType, url: String, title: String) -> impl IntoView {
    match media_type {
        MediaType::Image => view! {
            <img src=url alt=title class="w-full h-auto mb-4" />
        }
        .into_view(),
        MediaType::Video => view! {
            <iframe
                src=url
                title=title
                class="w-full h-96 mb-4"
                frameborder="0"
                allowfullscreen=true
            ></iframe>
        }
        .into_view(),
        MediaType::Other => view! {}.into_view(),
    }
}
