//! Status bar widget
//!
//! Key hint badges packed into rows at the bottom of the screen. Narrow
//! terminals get extra rows instead of truncated hints, so the reserved
//! height must be computed with [`status_hints_height`] before layout.

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;

/// Display width of one hint badge: " [key] label "
fn badge_width(hint: &KeyHint) -> usize {
    hint.key.chars().count() + hint.label.chars().count() + 5
}

/// Pack hints into rows that fit `width`, greedy left-to-right.
///
/// A badge wider than the whole row still occupies a row of its own
/// (badges are never split).
fn pack_rows(hints: &[KeyHint], width: u16) -> Vec<Vec<KeyHint>> {
    let max_width = width.max(1) as usize;
    let mut rows: Vec<Vec<KeyHint>> = Vec::new();
    let mut row: Vec<KeyHint> = Vec::new();
    let mut row_width = 0usize;

    for &hint in hints {
        let badge = badge_width(&hint);
        // One separator space between badges on the same row
        let needed = if row.is_empty() { badge } else { badge + 1 };
        if !row.is_empty() && row_width + needed > max_width {
            rows.push(std::mem::take(&mut row));
            row_width = badge;
        } else {
            row_width += needed;
        }
        row.push(hint);
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Number of rows the status bar needs for `hints` at `width`.
///
/// Returns 0 when there are no hints, so views without a status bar
/// (e.g. Help) reserve no space.
pub fn status_hints_height(hints: &[KeyHint], width: u16) -> u16 {
    if hints.is_empty() {
        return 0;
    }
    pack_rows(hints, width).len() as u16
}

/// Render the hint rows at the bottom of the screen
pub fn render_status_hints(frame: &mut Frame, hints: &[KeyHint]) {
    if hints.is_empty() {
        return;
    }

    let area = frame.area();
    let rows = pack_rows(hints, area.width);
    let height = rows.len() as u16;
    if area.height <= height {
        return;
    }

    let bar_area = Rect {
        x: area.x,
        y: area.y + area.height - height,
        width: area.width,
        height,
    };

    let lines: Vec<Line<'static>> = rows.iter().map(|row| build_status_bar(row)).collect();
    frame.render_widget(Paragraph::new(lines), bar_area);
}
