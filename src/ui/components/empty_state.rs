//! Empty state components
//!
//! Display messages when there's no content to show.

use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

/// Create a centered empty state display
///
/// # Arguments
/// * `title` - Main message to display
/// * `hint` - Optional hint text (displayed in gray)
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""), Line::from(title.to_string()).centered()];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(hint_text.to_string()).dark_gray().centered());
    }

    lines.push(Line::from(""));

    Paragraph::new(lines)
}

/// Create an empty state for a browse page with no matches
pub fn no_professionals_state() -> Paragraph<'static> {
    empty_state(
        "No professionals found.",
        Some("Try a different search or filter (x clears both)"),
    )
}

/// Create an empty state for a request tab with no entries
pub fn no_requests_state(incoming: bool) -> Paragraph<'static> {
    if incoming {
        empty_state("No incoming requests.", None)
    } else {
        empty_state(
            "No outgoing requests.",
            Some("Press s on a profile to send one"),
        )
    }
}
