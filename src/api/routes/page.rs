//! Page Route
//!
//! GET / - one page instance per request: fetch once, render the settled
//! view. Fetch failures still render a page (the error view) with 200.

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::view::{render_page, PageView};

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let view = PageView::new();
    let settled = view.initialize(state.source.as_ref()).await;
    Html(render_page(&settled))
}
