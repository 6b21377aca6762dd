//! APOD Viewer Frontend
//!
//! Astronomy Picture of the Day page built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches the day's record from the APOD viewer server's
//! JSON endpoint, which holds the provider access key.
//!
//! Build and serve with `trunk serve --port 8084`.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
