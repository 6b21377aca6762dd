//! Loading and error views.

use leptos::*;

/// Full-page loading indicator
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="text-center mt-20 text-4xl font-bold capitalize">"Loading..."</div>
    }
}

/// Full-page error message
#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="text-center mt-20 text-red-500 text-4xl font-bold capitalize">{message}</div>
    }
}
