//! Input dialog handling and rendering
//!
//! Single-line text entry used for swap messages, feedback comments,
//! and profile field edits. Enter submits the trimmed text, empty or
//! not; the dispatching action decides what a required field is.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{Dialog, DialogKind, DialogResult, centered_rect};

/// Byte offset of the given character position
fn byte_index(value: &str, cursor: usize) -> usize {
    value
        .char_indices()
        .nth(cursor)
        .map_or(value.len(), |(i, _)| i)
}

impl Dialog {
    pub(super) fn handle_input_key(&mut self, key: KeyEvent) -> Option<DialogResult> {
        let DialogKind::Input { value, cursor, .. } = &mut self.kind else {
            return None;
        };

        match key.code {
            KeyCode::Enter => Some(DialogResult::Confirmed(vec![value.trim().to_string()])),
            KeyCode::Esc => Some(DialogResult::Cancelled),
            KeyCode::Backspace => {
                if *cursor > 0 {
                    *cursor -= 1;
                    let at = byte_index(value, *cursor);
                    value.remove(at);
                }
                None
            }
            KeyCode::Delete => {
                if *cursor < value.chars().count() {
                    let at = byte_index(value, *cursor);
                    value.remove(at);
                }
                None
            }
            KeyCode::Left => {
                *cursor = cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if *cursor < value.chars().count() {
                    *cursor += 1;
                }
                None
            }
            KeyCode::Home => {
                *cursor = 0;
                None
            }
            KeyCode::End => {
                *cursor = value.chars().count();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let at = byte_index(value, *cursor);
                value.insert(at, c);
                *cursor += 1;
                None
            }
            _ => None,
        }
    }

    pub(super) fn render_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        prompt: &str,
        value: &str,
        cursor: usize,
    ) {
        let width = 50.min(area.width.saturating_sub(4));
        let height = 8.min(area.height.saturating_sub(4));

        let dialog_area = centered_rect(width, height, area);

        // Clear the area behind the dialog
        frame.render_widget(Clear, dialog_area);

        let inner_width = dialog_area.width.saturating_sub(2) as usize;
        if inner_width == 0 {
            return;
        }

        // Truncate display text if too long (show end of input, UTF-8 safe)
        let char_count = value.chars().count();
        let display_value = if char_count > inner_width.saturating_sub(1) {
            let skip = char_count.saturating_sub(inner_width.saturating_sub(2));
            format!("…{}", value.chars().skip(skip).collect::<String>())
        } else {
            value.to_string()
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                prompt.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                display_value.clone(),
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(Color::Green)),
                Span::raw(" Confirm "),
                Span::styled("[Esc]", Style::default().fg(Color::Red)),
                Span::raw(" Cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(paragraph, dialog_area);

        // Show the cursor on the value line (clamped, character-based)
        let display_cursor = cursor
            .min(display_value.chars().count())
            .min(inner_width.saturating_sub(1));
        frame.set_cursor_position((
            dialog_area.x + 1 + display_cursor as u16,
            dialog_area.y + 4,
        ));
    }
}
