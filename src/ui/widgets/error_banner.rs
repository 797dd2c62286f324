//! Error banner widget

use ratatui::{Frame, prelude::*, widgets::Paragraph};

use crate::ui::components;

/// Render an error message on the line directly above the status bar.
///
/// `status_bar_height` is the number of rows the status bar occupies
/// (0 when the current view has no hints).
pub fn render_error_banner(frame: &mut Frame, error: &str, status_bar_height: u16) {
    let area = frame.area();
    if area.height <= status_bar_height + 1 {
        return;
    }

    let error_area = Rect {
        x: area.x + 2,
        y: area.y + area.height - (status_bar_height + 1),
        width: area.width.saturating_sub(4),
        height: 1,
    };

    let error_line = components::build_error_line(error);
    frame.render_widget(Paragraph::new(error_line), error_area);
}
