//! APOD Page View
//!
//! Owns the loading/error/loaded state of one page instance and renders it.
//!
//! - [`PageView`]: single-assignment result slot, filled by one fetch
//! - [`render_html`] / [`render_page`]: HTML for the web page
//! - [`render_text`]: plain text for the terminal

mod render;
mod state;
mod text;

pub use render::{render_html, render_page, DEFAULT_TITLE, LOADING_TEXT};
pub use state::{PageView, ViewState};
pub use text::render_text;
