//! Terminal rendering for the CLI.

use super::render::LOADING_TEXT;
use super::state::ViewState;
use crate::fetcher::MediaType;

/// Render a state as plain text
pub fn render_text(state: &ViewState<'_>) -> String {
    let record = match state {
        ViewState::Loading => return LOADING_TEXT.to_string(),
        ViewState::Errored(message) => return message.to_string(),
        ViewState::Loaded(record) => record,
    };

    let mut lines = vec![record.title.clone(), String::new()];
    match record.media_type {
        MediaType::Image => {
            lines.push(format!("[image] {}", record.url));
            if let Some(hdurl) = &record.hdurl {
                lines.push(format!("HD: {}", hdurl));
            }
            lines.push(String::new());
        }
        MediaType::Video => {
            lines.push(format!("[video] {}", record.url));
            lines.push(String::new());
        }
        MediaType::Other => {}
    }
    lines.push(record.explanation.clone());
    lines.push(String::new());
    lines.push(format!("Date: {}", record.date));

    lines.join("\n")
}
