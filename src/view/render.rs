//! HTML Rendering
//!
//! Pure functions from [`ViewState`] to markup. Every text node and
//! attribute value is HTML-escaped.

use html_escaper::HtmlEscaper;
use std::fmt::{self, Write};

use super::state::ViewState;
use crate::fetcher::{DayRecord, MediaType};

/// Loading indicator text
pub const LOADING_TEXT: &str = "Loading...";

/// Document title when no record is loaded
pub const DEFAULT_TITLE: &str = "Astronomy Picture of the Day";

const LOADING_CLASS: &str = "text-center mt-20 text-4xl font-bold capitalize";
const ERROR_CLASS: &str = "text-center mt-20 text-red-500 text-4xl font-bold capitalize";

/// Text that is HTML-escaped when displayed
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        HtmlEscaper(f).write_str(self.0)
    }
}

/// Render the page body for a state
///
/// Exactly one of the three views is produced.
pub fn render_html(state: &ViewState<'_>) -> String {
    match state {
        ViewState::Loading => format!(r#"<div class="{LOADING_CLASS}">{LOADING_TEXT}</div>"#),
        ViewState::Errored(message) => {
            format!(r#"<div class="{ERROR_CLASS}">{}</div>"#, Escaped(*message))
        }
        ViewState::Loaded(record) => render_record(record),
    }
}

/// Render a complete HTML document for a state
pub fn render_page(state: &ViewState<'_>) -> String {
    let title = match state {
        ViewState::Loaded(record) => record.title.as_str(),
        _ => DEFAULT_TITLE,
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body>
{}
</body>
</html>
"#,
        Escaped(title),
        render_html(state)
    )
}

fn render_record(record: &DayRecord) -> String {
    let title = Escaped(&record.title);
    let url = Escaped(&record.url);

    let media = match record.media_type {
        MediaType::Image => format!(
            r#"<img src="{url}" alt="{title}" class="w-full h-auto mb-4">"#
        ),
        MediaType::Video => format!(
            r#"<iframe src="{url}" title="{title}" class="w-full h-96 mb-4" frameborder="0" allowfullscreen></iframe>"#
        ),
        MediaType::Other => {
            tracing::debug!(date = %record.date, "No renderer for media type, leaving media area empty");
            String::new()
        }
    };

    format!(
        r#"<div class="container mx-auto p-4"><h1 class="text-2xl font-bold mb-4">{title}</h1>{media}<p class="text-gray-700">{}</p><p class="text-gray-500 text-sm mt-2">Date: {}</p></div>"#,
        Escaped(&record.explanation),
        Escaped(&record.date)
    )
}
